//! Entry display formatting
//!
//! Tables for entry listings and a detail view for a single entry.

use chrono::FixedOffset;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Entry;

/// One row of the entry table
#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    entry_type: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// Shorten `text` to `max` characters, marking the cut with `...`
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

fn entry_row(entry: &Entry, offset: &FixedOffset, currency_symbol: &str) -> EntryRow {
    EntryRow {
        id: entry.id.to_string(),
        date: entry.date.local_date(offset).format("%Y-%m-%d").to_string(),
        entry_type: entry.entry_type.to_string(),
        category: entry.category_label().unwrap_or("-").to_string(),
        amount: entry.amount.format_with_symbol(currency_symbol),
        note: truncate(entry.note.as_deref().unwrap_or(""), 30),
    }
}

/// Format a list of entries as a table
pub fn format_entry_table(entries: &[Entry], offset: &FixedOffset, currency_symbol: &str) -> String {
    if entries.is_empty() {
        return "No entries found.\n".to_string();
    }

    let rows: Vec<EntryRow> = entries
        .iter()
        .map(|e| entry_row(e, offset, currency_symbol))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format entry details for display
pub fn format_entry_details(entry: &Entry, offset: &FixedOffset, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Entry:    {}\n", entry.id));
    output.push_str(&format!("Type:     {}\n", entry.entry_type));
    output.push_str(&format!(
        "Date:     {}\n",
        entry.date.local_date(offset).format("%Y-%m-%d")
    ));
    output.push_str(&format!(
        "Amount:   {}\n",
        entry.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Category: {}\n",
        entry.category_label().unwrap_or("(uncategorized)")
    ));

    if let Some(note) = entry.note.as_deref().filter(|n| !n.is_empty()) {
        output.push_str(&format!("Note:     {}\n", note));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryId, EntryType, Money, Timestamp};
    use chrono::NaiveDate;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn sample() -> Entry {
        Entry::new(
            EntryId::new(7),
            EntryType::Expense,
            Timestamp::start_of_day(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(), &utc()),
            Money::from_units(1500, 0),
        )
        .with_category("Food")
        .with_note("Team lunch")
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer note", 10), "a much ...");
    }

    #[test]
    fn test_entry_table() {
        let table = format_entry_table(&[sample()], &utc(), "Rs. ");
        assert!(table.contains("Category"));
        assert!(table.contains("2025-01-05"));
        assert!(table.contains("Rs. 1,500.00"));
        assert!(table.contains("Team lunch"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_entry_table(&[], &utc(), "Rs. "), "No entries found.\n");
    }

    #[test]
    fn test_entry_details() {
        let details = format_entry_details(&sample(), &utc(), "Rs. ");
        assert!(details.contains("Entry:    #7\n"));
        assert!(details.contains("Category: Food\n"));
        assert!(details.contains("Note:     Team lunch\n"));
    }
}
