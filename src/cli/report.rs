//! CLI commands for reports
//!
//! Dashboard, category breakdown, trends and the category pie chart.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use super::{parse_date, parse_period};
use crate::analytics::{entries_in_period, EntryFilter};
use crate::chart::PieChart;
use crate::config::settings::Settings;
use crate::error::{SaverError, SaverResult};
use crate::models::{EntryType, Period};
use crate::reports::{BreakdownReport, DashboardReport, TrendReport};
use crate::storage::Storage;

/// Dashboard filters
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
    /// Only this type (expense or saving)
    #[arg(short = 't', long = "type")]
    pub entry_type: Option<EntryType>,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Category totals and shares for a period
    Breakdown {
        /// Month ("2025-01"), year ("2025") or last-month/this-year/..., defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
        /// Only this type (expense or saving)
        #[arg(short = 't', long = "type")]
        entry_type: Option<EntryType>,
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Expense and saving totals per day (month) or per month (year)
    Trend {
        /// Month ("2025-01"), year ("2025") or last-month/this-year/..., defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a category pie chart as SVG
    Chart {
        /// Month ("2025-01"), year ("2025") or last-month/this-year/..., defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
        /// Entry type to chart
        #[arg(short = 't', long = "type", default_value = "expense")]
        entry_type: EntryType,
        /// Output SVG file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn resolve_period(period: Option<String>, settings: &Settings) -> SaverResult<Period> {
    match period {
        Some(p) => parse_period(&p, &settings.utc_offset()),
        None => Ok(Period::current_month(&settings.utc_offset())),
    }
}

fn create_file(path: &Path) -> SaverResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        SaverError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Handle the dashboard command
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    args: DashboardArgs,
) -> SaverResult<()> {
    let mut filter = EntryFilter::new();
    if let Some(t) = args.entry_type {
        filter = filter.entry_type(t);
    }
    if let Some(from) = args.from {
        filter = filter.from(parse_date(&from)?);
    }
    if let Some(to) = args.to {
        filter = filter.to(parse_date(&to)?);
    }

    let report = DashboardReport::generate(storage, filter, &settings.utc_offset())?;
    print!("{}", report.format_terminal(&settings.currency_symbol));

    Ok(())
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> SaverResult<()> {
    let offset = settings.utc_offset();

    match cmd {
        ReportCommands::Breakdown {
            period,
            entry_type,
            output,
        } => {
            let period = resolve_period(period, settings)?;
            let report = BreakdownReport::generate(storage, period, entry_type, &offset)?;

            if let Some(path) = output {
                let mut writer = create_file(&path)?;
                report.export_csv(&mut writer)?;
                println!("Breakdown exported to: {}", path.display());
            } else {
                print!("{}", report.format_terminal(&settings.currency_symbol));
            }
        }

        ReportCommands::Trend { period, output } => {
            let period = resolve_period(period, settings)?;
            let report = TrendReport::generate(storage, period, &offset)?;

            if let Some(path) = output {
                let mut writer = create_file(&path)?;
                report.export_csv(&mut writer)?;
                println!("Trend exported to: {}", path.display());
            } else {
                print!("{}", report.format_terminal(&settings.currency_symbol));
            }
        }

        ReportCommands::Chart {
            period,
            entry_type,
            output,
        } => {
            let period = resolve_period(period, settings)?;
            let entries = entries_in_period(&storage.entries.get_all()?, &period, &offset);
            let report = BreakdownReport::from_entries(&entries, period, Some(entry_type));
            let chart = PieChart::new(&report.shares, entry_type);

            std::fs::write(&output, chart.render_svg(&settings.currency_symbol)).map_err(|e| {
                SaverError::Export(format!("Failed to write {}: {}", output.display(), e))
            })?;

            if chart.is_empty() {
                println!("{}", chart.empty_message());
            }
            println!("Chart written to: {}", output.display());
        }
    }

    Ok(())
}
