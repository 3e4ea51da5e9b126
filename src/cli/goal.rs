//! Savings goal CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_date};
use crate::config::settings::Settings;
use crate::display::{format_goal_details, format_goal_table};
use crate::error::SaverResult;
use crate::models::Timestamp;
use crate::services::{CreateGoalInput, GoalService, UpdateGoalInput};
use crate::storage::Storage;

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
        /// Amount already saved
        #[arg(short, long)]
        saved: Option<String>,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
        /// Note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List savings goals
    List,
    /// Show goal details
    Show {
        /// Goal name or ID
        goal: String,
    },
    /// Edit a savings goal
    Edit {
        /// Goal name or ID
        goal: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New target amount
        #[arg(short, long)]
        target: Option<String>,
        /// New saved amount
        #[arg(short, long)]
        saved: Option<String>,
        /// New deadline (YYYY-MM-DD, or "none" to clear)
        #[arg(short, long)]
        deadline: Option<String>,
        /// New note (empty string clears it)
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Delete a savings goal
    Delete {
        /// Goal name or ID
        goal: String,
    },
}

/// Handle a savings goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> SaverResult<()> {
    let service = GoalService::new(storage);
    let offset = settings.utc_offset();
    let symbol = settings.currency_symbol.as_str();

    let parse_deadline = |s: &str| -> SaverResult<Timestamp> {
        Ok(Timestamp::start_of_day(parse_date(s)?, &offset))
    };

    match cmd {
        GoalCommands::Add {
            name,
            target,
            saved,
            deadline,
            note,
        } => {
            let goal = service.create(CreateGoalInput {
                name,
                target_amount: parse_amount(&target)?,
                current_amount: saved.map(|s| parse_amount(&s)).transpose()?,
                deadline: deadline.map(|d| parse_deadline(&d)).transpose()?,
                note,
            })?;

            println!("Created savings goal:");
            print!("{}", format_goal_details(&goal, symbol));
        }

        GoalCommands::List => {
            let goals = service.list()?;
            print!("{}", format_goal_table(&goals, &offset, symbol));
        }

        GoalCommands::Show { goal } => {
            let goal = service.find(&goal)?;
            print!("{}", format_goal_details(&goal, symbol));
            if let Some(note) = &goal.note {
                println!("Note:      {}", note);
            }
        }

        GoalCommands::Edit {
            goal,
            name,
            target,
            saved,
            deadline,
            note,
        } => {
            let goal = service.find(&goal)?;

            let deadline = match deadline.as_deref() {
                None => None,
                Some(d) if d.eq_ignore_ascii_case("none") => Some(None),
                Some(d) => Some(Some(parse_deadline(d)?)),
            };

            let input = UpdateGoalInput {
                name,
                target_amount: target.map(|t| parse_amount(&t)).transpose()?,
                current_amount: saved.map(|s| parse_amount(&s)).transpose()?,
                deadline,
                note,
            };

            let updated = service.update(goal.id, input)?;
            println!("Updated savings goal:");
            print!("{}", format_goal_details(&updated, symbol));
        }

        GoalCommands::Delete { goal } => {
            let goal = service.find(&goal)?;
            let deleted = service.delete(goal.id)?;
            println!("Deleted savings goal '{}'", deleted.name);
        }
    }

    Ok(())
}
