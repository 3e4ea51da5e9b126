//! CLI command for statement export

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use super::parse_period;
use crate::config::settings::Settings;
use crate::error::SaverResult;
use crate::export::{write_statement, StatementData, StatementFormat};
use crate::models::Period;
use crate::storage::Storage;

/// Statement options
#[derive(Args, Debug)]
pub struct StatementArgs {
    /// Month ("2025-01"), year ("2025") or last-month/this-year/..., defaults to the current month
    #[arg(short, long)]
    pub period: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pdf")]
    pub format: StatementFormat,

    /// Directory the statement is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

/// Handle the statement command
pub fn handle_statement_command(
    storage: &Storage,
    settings: &Settings,
    args: StatementArgs,
) -> SaverResult<()> {
    let offset = settings.utc_offset();
    let period = match args.period {
        Some(p) => parse_period(&p, &offset)?,
        None => Period::current_month(&offset),
    };

    let generated_at = Utc::now().with_timezone(&offset).naive_local();
    let data = StatementData::for_period(&storage.entries.get_all()?, &period, generated_at, offset)
        .with_title(settings.statement_title.clone());

    let path = write_statement(storage, &data, args.format, &args.output_dir)?;

    println!(
        "Statement for {} ({} entries) written to: {}",
        data.period_label,
        data.entries.len(),
        path.display()
    );

    Ok(())
}
