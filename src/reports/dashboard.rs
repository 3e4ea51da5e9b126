//! Dashboard Report
//!
//! Totals and per-category amounts for the entries matching a filter.

use chrono::FixedOffset;

use crate::analytics::{Dashboard, EntryFilter};
use crate::error::SaverResult;
use crate::services::EntryService;
use crate::storage::Storage;

/// Dashboard Report
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub filter: EntryFilter,
    pub dashboard: Dashboard,
    /// Number of entries that matched the filter
    pub entry_count: usize,
}

impl DashboardReport {
    /// Generate a dashboard for the entries matching `filter`
    pub fn generate(
        storage: &Storage,
        filter: EntryFilter,
        offset: &FixedOffset,
    ) -> SaverResult<Self> {
        let entries = EntryService::new(storage).list(&filter, offset)?;
        Ok(Self {
            dashboard: Dashboard::from_entries(&entries),
            entry_count: entries.len(),
            filter,
        })
    }

    fn scope(&self) -> String {
        let from = self
            .filter
            .start_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "beginning".to_string());
        let to = self
            .filter
            .end_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "now".to_string());
        match self.filter.entry_type {
            Some(t) => format!("{} to {}, {} only", from, to, t.as_str()),
            None => format!("{} to {}", from, to),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let summary = &self.dashboard.summary;
        let mut output = String::new();

        output.push_str(&format!("Dashboard: {}\n", self.scope()));
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>20}\n",
            "Total Expenses:",
            summary.total_expenses.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>20}\n",
            "Total Savings:",
            summary.total_savings.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>20}\n",
            "Net Balance:",
            summary.net_balance.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!("{:<20} {:>20}\n", "Entries:", self.entry_count));

        if !self.dashboard.category_breakdown.is_empty() {
            output.push('\n');
            output.push_str("By category\n");
            output.push_str(&"-".repeat(50));
            output.push('\n');
            for total in &self.dashboard.category_breakdown {
                output.push_str(&format!(
                    "{:<20} {:>20}\n",
                    total.category,
                    total.total.format_with_symbol(currency_symbol)
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SaverPaths;
    use crate::models::{Entry, EntryType, Money, Timestamp};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaverPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add(storage: &Storage, entry_type: EntryType, day: u32, units: i64, category: &str) {
        let id = storage.entries.allocate_id().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
        storage
            .entries
            .upsert(
                Entry::new(
                    id,
                    entry_type,
                    Timestamp::start_of_day(date, &utc()),
                    Money::from_units(units, 0),
                )
                .with_category(category),
            )
            .unwrap();
    }

    #[test]
    fn test_dashboard_with_date_filter() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, EntryType::Expense, 5, 100, "Food");
        add(&storage, EntryType::Saving, 10, 300, "FD");
        add(&storage, EntryType::Expense, 25, 70, "Travel");

        let filter = EntryFilter::new()
            .from(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
            .to(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        let report = DashboardReport::generate(&storage, filter, &utc()).unwrap();

        assert_eq!(report.entry_count, 2);
        assert_eq!(report.dashboard.summary.net_balance, Money::from_units(200, 0));

        let text = report.format_terminal("Rs. ");
        assert!(text.starts_with("Dashboard: 2025-01-01 to 2025-01-10\n"));
        assert!(text.contains("Food"));
        assert!(!text.contains("Travel"));
    }

    #[test]
    fn test_dashboard_type_filter() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, EntryType::Expense, 5, 100, "Food");
        add(&storage, EntryType::Saving, 10, 300, "FD");

        let filter = EntryFilter::new().entry_type(EntryType::Saving);
        let report = DashboardReport::generate(&storage, filter, &utc()).unwrap();

        assert_eq!(report.entry_count, 1);
        assert_eq!(report.dashboard.summary.total_expenses, Money::zero());
        assert!(report
            .format_terminal("Rs. ")
            .starts_with("Dashboard: beginning to now, saving only\n"));
    }
}
