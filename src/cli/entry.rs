//! Entry CLI commands
//!
//! Implements CLI commands for recording and managing expenses and savings.

use std::path::PathBuf;

use clap::Subcommand;

use super::{parse_amount, parse_date, parse_period};
use crate::analytics::{sort_by_date, EntryFilter};
use crate::config::settings::Settings;
use crate::display::{format_entry_details, format_entry_table};
use crate::error::{SaverError, SaverResult};
use crate::models::{categories_for, EntryType, Timestamp};
use crate::services::{CreateEntryInput, EntryService, UpdateEntryInput};
use crate::storage::Storage;

/// Entry subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Record an expense or a saving
    Add {
        /// Entry type (expense or saving)
        entry_type: EntryType,
        /// Amount (e.g., "250" or "1,250.50")
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Entry date (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
        /// Note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List entries, newest first
    List {
        /// Only this type (expense or saving)
        #[arg(short = 't', long = "type")]
        entry_type: Option<EntryType>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Month ("2025-01"), year ("2025") or last-month/this-year/...; overrides --from/--to
        #[arg(short, long)]
        period: Option<String>,
        /// Number of entries to show (defaults to the configured list limit)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Show every matching entry
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },
    /// Show entry details
    Show {
        /// Entry ID
        id: String,
    },
    /// Edit an entry
    Edit {
        /// Entry ID
        id: String,
        /// New type
        #[arg(short = 't', long = "type")]
        entry_type: Option<EntryType>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category (empty string clears it)
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New note (empty string clears it)
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Delete an entry
    Delete {
        /// Entry ID
        id: String,
    },
    /// Import entries from a JSON dump of the entry backend
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },
    /// List the valid categories
    Categories {
        /// Only this type (expense or saving)
        entry_type: Option<EntryType>,
    },
}

/// Handle an entry command
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EntryCommands,
) -> SaverResult<()> {
    let service = EntryService::new(storage);
    let offset = settings.utc_offset();
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        EntryCommands::Add {
            entry_type,
            amount,
            category,
            date,
            note,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(date_str) => Timestamp::start_of_day(parse_date(&date_str)?, &offset),
                None => Timestamp::now(),
            };

            let entry = service.create(CreateEntryInput {
                entry_type,
                date,
                amount,
                category,
                note,
            })?;

            println!("Recorded {}:", entry.entry_type.as_str());
            print!("{}", format_entry_details(&entry, &offset, symbol));
        }

        EntryCommands::List {
            entry_type,
            from,
            to,
            period,
            limit,
            all,
        } => {
            let mut filter = EntryFilter::new();
            if let Some(t) = entry_type {
                filter = filter.entry_type(t);
            }

            if let Some(period_str) = period {
                filter = filter.period(&parse_period(&period_str, &offset)?);
            } else {
                if let Some(from_str) = from {
                    filter = filter.from(parse_date(&from_str)?);
                }
                if let Some(to_str) = to {
                    filter = filter.to(parse_date(&to_str)?);
                }
            }

            let mut entries = service.list(&filter, &offset)?;
            let matched = entries.len();
            sort_by_date(&mut entries);
            entries.reverse();
            if !all {
                entries.truncate(limit.unwrap_or(settings.list_limit));
            }

            print!("{}", format_entry_table(&entries, &offset, symbol));
            println!("\nShowing {} of {} entries", entries.len(), matched);
        }

        EntryCommands::Show { id } => {
            let entry = service.find(&id)?;
            print!("{}", format_entry_details(&entry, &offset, symbol));
        }

        EntryCommands::Edit {
            id,
            entry_type,
            amount,
            category,
            date,
            note,
        } => {
            let entry = service.find(&id)?;

            let input = UpdateEntryInput {
                entry_type,
                date: date
                    .map(|d| parse_date(&d).map(|day| Timestamp::start_of_day(day, &offset)))
                    .transpose()?,
                amount: amount.map(|a| parse_amount(&a)).transpose()?,
                category,
                note,
            };

            let updated = service.update(entry.id, input)?;
            println!("Updated entry:");
            print!("{}", format_entry_details(&updated, &offset, symbol));
        }

        EntryCommands::Delete { id } => {
            let entry = service.find(&id)?;
            let deleted = service.delete(entry.id)?;
            println!("Deleted entry {}", deleted.id);
        }

        EntryCommands::Import { file } => {
            let json = std::fs::read_to_string(&file).map_err(|e| {
                SaverError::Import(format!("Failed to read {}: {}", file.display(), e))
            })?;
            let summary = service.import_json(&json)?;
            println!(
                "Imported {} entries ({} new, {} replaced)",
                summary.added + summary.replaced,
                summary.added,
                summary.replaced
            );
        }

        EntryCommands::Categories { entry_type } => {
            let types = match entry_type {
                Some(t) => vec![t],
                None => vec![EntryType::Expense, EntryType::Saving],
            };
            for t in types {
                println!("{}:", t);
                for category in categories_for(t) {
                    println!("  {}", category);
                }
            }
        }
    }

    Ok(())
}
