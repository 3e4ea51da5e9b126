//! Savings goal display formatting

use chrono::FixedOffset;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_bar, format_percentage};
use crate::models::SavingsGoal;

const PROGRESS_WIDTH: usize = 20;

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
}

/// Format savings goals as a table with progress bars
pub fn format_goal_table(
    goals: &[SavingsGoal],
    offset: &FixedOffset,
    currency_symbol: &str,
) -> String {
    if goals.is_empty() {
        return "No savings goals found.\n".to_string();
    }

    let rows: Vec<GoalRow> = goals
        .iter()
        .map(|goal| {
            let pct = goal.progress_percentage();
            GoalRow {
                id: goal.id.to_string(),
                name: goal.name.clone(),
                saved: goal.current_amount.format_with_symbol(currency_symbol),
                target: goal.target_amount.format_with_symbol(currency_symbol),
                progress: format!(
                    "{} {}",
                    format_bar(pct, 100.0, PROGRESS_WIDTH),
                    format_percentage(pct)
                ),
                deadline: goal
                    .deadline
                    .map(|d| d.local_date(offset).format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string()),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format goal details for display
pub fn format_goal_details(goal: &SavingsGoal, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Goal:      {} ({})\n", goal.name, goal.id));
    output.push_str(&format!(
        "Saved:     {} of {}\n",
        goal.current_amount.format_with_symbol(currency_symbol),
        goal.target_amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Progress:  {}\n",
        format_percentage(goal.progress_percentage())
    ));

    if goal.is_complete() {
        output.push_str("Status:    Complete\n");
    } else {
        output.push_str(&format!(
            "Remaining: {}\n",
            goal.remaining().format_with_symbol(currency_symbol)
        ));
    }

    output
}
