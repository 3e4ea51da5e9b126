//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod entry;
pub mod goal;
pub mod report;
pub mod statement;

pub use entry::{handle_entry_command, EntryCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_dashboard_command, handle_report_command, DashboardArgs, ReportCommands};
pub use statement::{handle_statement_command, StatementArgs};

use chrono::{FixedOffset, NaiveDate};

use crate::error::{SaverError, SaverResult};
use crate::models::{Money, Period};
use crate::storage::Storage;

/// Parse a `YYYY-MM-DD` argument
pub(crate) fn parse_date(s: &str) -> SaverResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        SaverError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

/// Parse an amount argument such as "250", "1,250.50" or "₹99"
pub(crate) fn parse_amount(s: &str) -> SaverResult<Money> {
    Money::parse(s).map_err(|e| {
        SaverError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '250' or '1,250.50'. Error: {}",
            s, e
        ))
    })
}

/// Parse a period argument relative to today in `offset`
pub(crate) fn parse_period(s: &str, offset: &FixedOffset) -> SaverResult<Period> {
    resolve_period(s, Period::current_month(offset))
}

/// Resolve `YYYY-MM`, `YYYY`, or one of `this-month`, `last-month`,
/// `this-year`, `last-year` counted from `this_month`
fn resolve_period(s: &str, this_month: Period) -> SaverResult<Period> {
    let this_year = Period::year(this_month.calendar_year());
    match s.trim().to_ascii_lowercase().as_str() {
        "this-month" => return Ok(this_month),
        "last-month" => return Ok(this_month.prev()),
        "this-year" => return Ok(this_year),
        "last-year" => return Ok(this_year.prev()),
        _ => {}
    }

    Period::parse(s).map_err(|e| {
        SaverError::Validation(format!(
            "Invalid period: {}. Use YYYY-MM (e.g., 2025-01), YYYY, \
             this-month, last-month, this-year or last-year",
            e
        ))
    })
}

/// Print the most recent audit log entries, oldest first
pub fn handle_audit_command(storage: &Storage, limit: usize) -> SaverResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    println!(
        "\nShowing {} of {} audit entries",
        entries.len(),
        storage.audit().entry_count()?
    );

    Ok(())
}
