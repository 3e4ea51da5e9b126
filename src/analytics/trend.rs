//! Expense and saving totals bucketed over a period
//!
//! A month is split into days (labelled "1".."31"), a year into months
//! (labelled "Jan".."Dec").

use chrono::{Datelike, FixedOffset};
use serde::Serialize;

use crate::models::{Entry, EntryType, Money, Period};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Totals for one bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub expenses: Money,
    pub savings: Money,
}

impl TrendPoint {
    fn empty(label: String) -> Self {
        Self {
            label,
            expenses: Money::zero(),
            savings: Money::zero(),
        }
    }

    fn add(&mut self, entry: &Entry) {
        match entry.entry_type {
            EntryType::Expense => self.expenses += entry.amount,
            EntryType::Saving => self.savings += entry.amount,
        }
    }
}

/// One point per day of a month period, or per month of a year period
///
/// Entries outside the period are ignored. Every bucket is present even
/// when it has no entries.
pub fn trend_buckets(entries: &[Entry], period: &Period, offset: &FixedOffset) -> Vec<TrendPoint> {
    match period {
        Period::Month { .. } => {
            let first = period.start_date();
            let days = period.end_date().day();
            let mut points: Vec<TrendPoint> = (1..=days)
                .map(|day| TrendPoint::empty(day.to_string()))
                .collect();

            for entry in entries {
                let date = entry.date.local_date(offset);
                if period.contains_date(date) {
                    points[(date.day() - first.day()) as usize].add(entry);
                }
            }
            points
        }
        Period::Year { .. } => {
            let mut points: Vec<TrendPoint> = MONTH_LABELS
                .iter()
                .map(|label| TrendPoint::empty(label.to_string()))
                .collect();

            for entry in entries {
                let date = entry.date.local_date(offset);
                if period.contains_date(date) {
                    points[date.month0() as usize].add(entry);
                }
            }
            points
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryId, MonthIndex, Timestamp};
    use chrono::NaiveDate;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(330 * 60).unwrap()
    }

    fn entry(entry_type: EntryType, y: i32, m: u32, d: u32, units: i64) -> Entry {
        let day = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        Entry::new(
            EntryId::new(1),
            entry_type,
            Timestamp::start_of_day(day, &ist()),
            Money::from_units(units, 0),
        )
    }

    #[test]
    fn test_month_has_one_bucket_per_day() {
        let period = Period::month(2024, MonthIndex::from_number(2).unwrap());
        let entries = vec![
            entry(EntryType::Expense, 2024, 2, 1, 100),
            entry(EntryType::Expense, 2024, 2, 1, 50),
            entry(EntryType::Saving, 2024, 2, 29, 200),
            entry(EntryType::Saving, 2024, 3, 1, 999),
        ];

        let points = trend_buckets(&entries, &period, &ist());
        assert_eq!(points.len(), 29);
        assert_eq!(points[0].label, "1");
        assert_eq!(points[0].expenses, Money::from_units(150, 0));
        assert_eq!(points[28].label, "29");
        assert_eq!(points[28].savings, Money::from_units(200, 0));

        let total: Money = points.iter().map(|p| p.savings).sum();
        assert_eq!(total, Money::from_units(200, 0));
    }

    #[test]
    fn test_year_has_month_buckets() {
        let entries = vec![
            entry(EntryType::Expense, 2025, 1, 31, 10),
            entry(EntryType::Saving, 2025, 12, 31, 20),
            entry(EntryType::Saving, 2024, 12, 31, 30),
        ];

        let points = trend_buckets(&entries, &Period::year(2025), &ist());
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
        assert_eq!(points[0].expenses, Money::from_units(10, 0));
        assert_eq!(points[11].savings, Money::from_units(20, 0));
    }
}
