//! PDF statement renderer
//!
//! Single-page layout: heading, ENTRIES table, SUMMARY block. Rows stop
//! with a `... (more entries)` marker once the cursor reaches the bottom
//! margin.

use super::pdf_document::{Font, PdfDocument};
use super::statement::StatementData;

const TOP: f64 = 750.0;
const LINE_HEIGHT: f64 = 14.0;
const MARGIN: f64 = 50.0;
const RULE_END: f64 = 562.0;
const TITLE_X: f64 = 200.0;
/// Rows are not drawn below this baseline
const BOTTOM_LIMIT: f64 = 100.0;

const NOTE_LIMIT: usize = 20;

/// Column x positions: Date, Type, Category, Amount, Note
const COLUMNS: [f64; 5] = [MARGIN, MARGIN + 80.0, MARGIN + 150.0, MARGIN + 300.0, MARGIN + 400.0];
const SUMMARY_VALUE_X: f64 = MARGIN + 200.0;

pub const MORE_ENTRIES: &str = "... (more entries)";

/// First `NOTE_LIMIT` characters of a note, with `...` when cut
fn truncate_note(note: &str) -> String {
    if note.chars().count() > NOTE_LIMIT {
        let head: String = note.chars().take(NOTE_LIMIT).collect();
        format!("{}...", head)
    } else {
        note.to_string()
    }
}

/// Render a statement as a PDF file
pub fn statement_pdf(data: &StatementData) -> Vec<u8> {
    let mut y = TOP;

    let mut doc = PdfDocument::new().text(&data.title, TITLE_X, y, 18.0, Font::Bold);
    y -= LINE_HEIGHT * 2.0;

    doc = doc.text(
        format!("Period: {}", data.period_label),
        MARGIN,
        y,
        12.0,
        Font::Regular,
    );
    y -= LINE_HEIGHT;
    doc = doc.text(
        format!("Generated: {}", data.generated_label()),
        MARGIN,
        y,
        12.0,
        Font::Regular,
    );
    y -= LINE_HEIGHT * 2.0;

    doc = doc.line(MARGIN, y, RULE_END, y);
    y -= LINE_HEIGHT * 1.5;

    doc = doc.text("ENTRIES", MARGIN, y, 14.0, Font::Bold);
    y -= LINE_HEIGHT * 1.5;

    for (header, x) in ["Date", "Type", "Category", "Amount", "Note"]
        .iter()
        .zip(COLUMNS)
    {
        doc = doc.text(*header, x, y, 10.0, Font::Bold);
    }
    y -= LINE_HEIGHT;

    doc = doc.line(MARGIN, y, RULE_END, y);
    y -= LINE_HEIGHT;

    if data.entries.is_empty() {
        doc = doc.text("No entries for this period.", MARGIN, y, 10.0, Font::Regular);
        y -= LINE_HEIGHT * 2.0;
    } else {
        for entry in &data.entries {
            if y < BOTTOM_LIMIT {
                doc = doc.text(MORE_ENTRIES, MARGIN, y, 10.0, Font::Regular);
                break;
            }

            let cells = [
                data.entry_date(entry),
                entry.entry_type.to_string(),
                entry.category_label().unwrap_or("N/A").to_string(),
                entry.amount.format_ascii(),
                entry.note.as_deref().map(truncate_note).unwrap_or_default(),
            ];
            for (cell, x) in cells.into_iter().zip(COLUMNS) {
                doc = doc.text(cell, x, y, 9.0, Font::Regular);
            }
            y -= LINE_HEIGHT;
        }
    }

    y -= LINE_HEIGHT;
    doc = doc.line(MARGIN, y, RULE_END, y);
    y -= LINE_HEIGHT * 1.5;

    doc = doc.text("SUMMARY", MARGIN, y, 14.0, Font::Bold);
    y -= LINE_HEIGHT * 1.5;

    doc = doc
        .text("Total Expenses:", MARGIN, y, 11.0, Font::Regular)
        .text(
            data.summary.total_expenses.format_ascii(),
            SUMMARY_VALUE_X,
            y,
            11.0,
            Font::Regular,
        );
    y -= LINE_HEIGHT;

    doc = doc
        .text("Total Savings:", MARGIN, y, 11.0, Font::Regular)
        .text(
            data.summary.total_savings.format_ascii(),
            SUMMARY_VALUE_X,
            y,
            11.0,
            Font::Regular,
        );
    y -= LINE_HEIGHT;

    doc = doc.line(MARGIN, y, RULE_END, y);
    y -= LINE_HEIGHT;

    doc.text("Net Balance:", MARGIN, y, 12.0, Font::Bold)
        .text(
            data.summary.net_balance.format_ascii(),
            SUMMARY_VALUE_X,
            y,
            12.0,
            Font::Bold,
        )
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, EntryId, EntryType, Money, Timestamp};
    use chrono::{FixedOffset, NaiveDate, NaiveDateTime};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn generated() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, 1)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap()
    }

    fn entry(id: u64, entry_type: EntryType, day: u32, units: i64) -> Entry {
        let date = NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
        Entry::new(
            EntryId::new(id),
            entry_type,
            Timestamp::start_of_day(date, &utc()),
            Money::from_units(units, 0),
        )
    }

    fn render(entries: Vec<Entry>) -> String {
        let data = StatementData::new("January 2025", entries, generated(), utc());
        String::from_utf8(statement_pdf(&data)).unwrap()
    }

    #[test]
    fn test_truncate_note() {
        assert_eq!(truncate_note("short"), "short");
        assert_eq!(truncate_note("exactly twenty chars"), "exactly twenty chars");
        assert_eq!(
            truncate_note("this note is definitely too long"),
            "this note is definit..."
        );
    }

    #[test]
    fn test_heading_and_summary() {
        let pdf = render(vec![
            entry(1, EntryType::Expense, 5, 1500).with_category("Food"),
            entry(2, EntryType::Saving, 10, 200000).with_category("FD"),
        ]);

        assert!(pdf.starts_with("%PDF-1.4\n"));
        assert!(pdf.contains("/F2 18 Tf\n200 750 Td\n(EXPENSE SAVER STATEMENT) Tj"));
        assert!(pdf.contains("(Period: January 2025) Tj"));
        assert!(pdf.contains("(Generated: 01/02/2025 18:30) Tj"));
        assert!(pdf.contains("(Rs. 1,500.00) Tj"));
        assert!(pdf.contains("(Rs. 2,00,000.00) Tj"));
        assert!(pdf.contains("(Rs. 1,98,500.00) Tj"));
        assert!(!pdf.contains(MORE_ENTRIES));
    }

    #[test]
    fn test_first_row_position() {
        let pdf = render(vec![entry(1, EntryType::Expense, 5, 10)]);
        assert!(pdf.contains("/F1 9 Tf\n50 610 Td\n(05/01/2025) Tj"));
        assert!(pdf.contains("/F1 9 Tf\n130 610 Td\n(Expense) Tj"));
        assert!(pdf.contains("/F1 9 Tf\n200 610 Td\n(N/A) Tj"));
    }

    #[test]
    fn test_empty_statement() {
        let pdf = render(Vec::new());
        assert!(pdf.contains("(No entries for this period.) Tj"));
        assert!(pdf.contains("(Rs. 0.00) Tj"));
    }

    #[test]
    fn test_long_statement_stops_with_marker() {
        let entries: Vec<Entry> = (1..=40)
            .map(|i| entry(i, EntryType::Expense, (i % 28 + 1) as u32, 1))
            .collect();
        let pdf = render(entries);

        assert!(pdf.contains("/F1 10 Tf\n50 92 Td\n(... \\(more entries\\)) Tj"));
        // 37 rows fit above the bottom margin
        assert_eq!(pdf.matches("/F1 9 Tf\n130 ").count(), 37);
    }

    #[test]
    fn test_note_is_truncated_and_escaped() {
        let pdf = render(vec![entry(1, EntryType::Expense, 5, 10)
            .with_note("lunch (with team) at the new place")]);
        assert!(pdf.contains("(lunch \\(with team\\) at...) Tj"));
    }
}
