//! Category Breakdown Report
//!
//! Ranks the categories of one period by amount, with each category's
//! share of the total.

use std::io::Write;

use chrono::FixedOffset;

use crate::analytics::{category_breakdown, entries_in_period, CategoryShare};
use crate::display::format_percentage;
use crate::error::{SaverError, SaverResult};
use crate::models::{Entry, EntryType, Money, Period};
use crate::storage::Storage;

/// Category Breakdown Report
#[derive(Debug, Clone)]
pub struct BreakdownReport {
    pub period: Period,
    /// `None` covers both entry types
    pub entry_type: Option<EntryType>,
    /// Categories, largest first
    pub shares: Vec<CategoryShare>,
    /// Sum of the categorized amounts
    pub total: Money,
    /// Entries of the selected type in the period without a category
    pub uncategorized_count: usize,
}

impl BreakdownReport {
    /// Generate a breakdown for a period
    pub fn generate(
        storage: &Storage,
        period: Period,
        entry_type: Option<EntryType>,
        offset: &FixedOffset,
    ) -> SaverResult<Self> {
        let entries = entries_in_period(&storage.entries.get_all()?, &period, offset);
        Ok(Self::from_entries(&entries, period, entry_type))
    }

    /// Build from entries already restricted to the period
    pub fn from_entries(
        entries: &[Entry],
        period: Period,
        entry_type: Option<EntryType>,
    ) -> Self {
        let shares = category_breakdown(entries, entry_type);
        let total = shares.iter().map(|s| s.value).sum();
        let uncategorized_count = entries
            .iter()
            .filter(|e| entry_type.map_or(true, |t| e.entry_type == t))
            .filter(|e| e.category_label().is_none())
            .count();

        Self {
            period,
            entry_type,
            shares,
            total,
            uncategorized_count,
        }
    }

    fn type_label(&self) -> &'static str {
        match self.entry_type {
            Some(EntryType::Expense) => "Expenses",
            Some(EntryType::Saving) => "Savings",
            None => "All Entries",
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Category Breakdown: {} ({})\n",
            self.period.label(),
            self.type_label()
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.shares.is_empty() {
            output.push_str("No categorized entries for this period.\n");
            return output;
        }

        output.push_str(&format!("{:<25} {:>18} {:>8}\n", "Category", "Amount", "%"));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for share in &self.shares {
            output.push_str(&format!(
                "{:<25} {:>18} {:>8}\n",
                share.category,
                share.value.format_with_symbol(currency_symbol),
                format_percentage(share.percentage)
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<25} {:>18}\n",
            "TOTAL",
            self.total.format_with_symbol(currency_symbol)
        ));

        if self.uncategorized_count > 0 {
            output.push_str(&format!(
                "\n{} uncategorized entries not shown\n",
                self.uncategorized_count
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SaverResult<()> {
        writeln!(writer, "Period,Category,Amount,Percentage")
            .map_err(|e| SaverError::Export(e.to_string()))?;

        for share in &self.shares {
            writeln!(
                writer,
                "{},{},{},{:.2}",
                self.period,
                share.category,
                share.value.to_decimal_string(),
                share.percentage
            )
            .map_err(|e| SaverError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
