//! CSV statement renderer

use crate::models::Money;

use super::statement::StatementData;

/// Quote a note, doubling embedded quotes; empty notes stay empty
fn quote_note(note: Option<&str>) -> String {
    match note.filter(|n| !n.is_empty()) {
        Some(n) => format!("\"{}\"", n.replace('"', "\"\"")),
        None => String::new(),
    }
}

fn amount(money: Money) -> String {
    money.to_decimal_string()
}

/// Render a statement as CSV text
///
/// Layout: heading block, `Date,Type,Category,Amount,Note` table (or a
/// no-entries line), blank line, then the SUMMARY block.
pub fn statement_csv(data: &StatementData) -> String {
    let mut csv = String::new();

    csv.push_str(&format!("{}\n", data.title));
    csv.push_str(&format!("Period: {}\n", data.period_label));
    csv.push_str(&format!("Generated: {}\n", data.generated_label()));
    csv.push('\n');

    csv.push_str("Date,Type,Category,Amount,Note\n");

    if data.entries.is_empty() {
        csv.push_str("No entries for this period.\n");
    } else {
        for entry in &data.entries {
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                data.entry_date(entry),
                entry.entry_type,
                entry.category_label().unwrap_or("N/A"),
                amount(entry.amount),
                quote_note(entry.note.as_deref())
            ));
        }
    }

    csv.push('\n');

    csv.push_str("SUMMARY\n");
    csv.push_str(&format!("Total Expenses,{}\n", amount(data.summary.total_expenses)));
    csv.push_str(&format!("Total Savings,{}\n", amount(data.summary.total_savings)));
    csv.push_str(&format!("Net Balance,{}\n", amount(data.summary.net_balance)));

    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, EntryId, EntryType, Timestamp};
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

    fn entry(id: u64, entry_type: EntryType, day: u32, units: i64, category: &str) -> Entry {
        let date = NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
        Entry::new(
            EntryId::new(id),
            entry_type,
            Timestamp::start_of_day(date, &utc()),
            Money::from_units(units, 0),
        )
        .with_category(category)
    }

    #[test]
    fn test_scenario_statement() {
        let entries = vec![
            entry(3, EntryType::Saving, 20, 200, "FD"),
            entry(1, EntryType::Expense, 5, 100, "Food"),
            entry(2, EntryType::Expense, 12, 50, "Food"),
        ];
        let data = StatementData::new("January 2025", entries, generated(), utc());

        let expected = "EXPENSE SAVER STATEMENT\n\
Period: January 2025\n\
Generated: 01/02/2025 18:30\n\
\n\
Date,Type,Category,Amount,Note\n\
05/01/2025,Expense,Food,100.00,\n\
12/01/2025,Expense,Food,50.00,\n\
20/01/2025,Saving,FD,200.00,\n\
\n\
SUMMARY\n\
Total Expenses,150.00\n\
Total Savings,200.00\n\
Net Balance,50.00\n";

        assert_eq!(statement_csv(&data), expected);
    }

    #[test]
    fn test_empty_statement() {
        let data = StatementData::new("Year 2024", Vec::new(), generated(), utc());
        let csv = statement_csv(&data);

        assert!(csv.lines().any(|l| l == "No entries for this period."));
        assert!(csv.contains("Total Expenses,0.00\nTotal Savings,0.00\nNet Balance,0.00\n"));
    }

    #[test]
    fn test_note_quoting_and_missing_category() {
        let mut e = entry(1, EntryType::Expense, 5, 10, "");
        e.note = Some("said \"hi\", left".to_string());
        let data = StatementData::new("January 2025", vec![e], generated(), utc());

        let csv = statement_csv(&data);
        assert!(csv.contains("05/01/2025,Expense,N/A,10.00,\"said \"\"hi\"\", left\"\n"));
    }

    #[test]
    fn test_negative_net_and_custom_title() {
        let data = StatementData::new(
            "January 2025",
            vec![entry(1, EntryType::Expense, 5, 75, "Food")],
            generated(),
            utc(),
        )
        .with_title("MY STATEMENT");

        let csv = statement_csv(&data);
        assert!(csv.starts_with("MY STATEMENT\n"));
        assert!(csv.ends_with("Net Balance,-75.00\n"));
    }
}
