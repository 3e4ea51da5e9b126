//! Trend Report
//!
//! Expense and saving totals per day of a month, or per month of a year.

use std::io::Write;

use chrono::FixedOffset;

use crate::analytics::{trend_buckets, TrendPoint};
use crate::error::{SaverError, SaverResult};
use crate::models::{Money, Period};
use crate::storage::Storage;

/// Width of the widest bar in the terminal chart
const BAR_WIDTH: usize = 30;

/// Trend Report
#[derive(Debug, Clone)]
pub struct TrendReport {
    pub period: Period,
    pub points: Vec<TrendPoint>,
}

impl TrendReport {
    /// Generate a trend report for a period
    pub fn generate(storage: &Storage, period: Period, offset: &FixedOffset) -> SaverResult<Self> {
        let entries = storage.entries.get_all()?;
        Ok(Self {
            period,
            points: trend_buckets(&entries, &period, offset),
        })
    }

    pub fn total_expenses(&self) -> Money {
        self.points.iter().map(|p| p.expenses).sum()
    }

    pub fn total_savings(&self) -> Money {
        self.points.iter().map(|p| p.savings).sum()
    }

    /// Largest single bucket value, for scaling bars
    fn peak(&self) -> Money {
        self.points
            .iter()
            .flat_map(|p| [p.expenses, p.savings])
            .max()
            .unwrap_or_default()
    }

    fn bar(&self, value: Money, peak: Money) -> String {
        if peak.is_zero() {
            return String::new();
        }
        let len = ((value.cents() as f64 / peak.cents() as f64) * BAR_WIDTH as f64).round() as usize;
        "#".repeat(len)
    }

    /// Format the report for terminal display
    ///
    /// Buckets with neither expenses nor savings are skipped.
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Trend: {}\n", self.period.label()));
        output.push_str(&"=".repeat(70));
        output.push('\n');

        let peak = self.peak();
        if peak.is_zero() {
            output.push_str("No entries for this period.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<6} {:>16} {:>16}\n",
            "", "Expenses", "Savings"
        ));

        for point in &self.points {
            if point.expenses.is_zero() && point.savings.is_zero() {
                continue;
            }
            output.push_str(&format!(
                "{:<6} {:>16} {:>16}\n",
                point.label,
                point.expenses.format_with_symbol(currency_symbol),
                point.savings.format_with_symbol(currency_symbol)
            ));
            if !point.expenses.is_zero() {
                output.push_str(&format!("       E {}\n", self.bar(point.expenses, peak)));
            }
            if !point.savings.is_zero() {
                output.push_str(&format!("       S {}\n", self.bar(point.savings, peak)));
            }
        }

        output.push_str(&"-".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "{:<6} {:>16} {:>16}\n",
            "TOTAL",
            self.total_expenses().format_with_symbol(currency_symbol),
            self.total_savings().format_with_symbol(currency_symbol)
        ));

        output
    }

    /// Export the report to CSV format, one row per bucket
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SaverResult<()> {
        writeln!(writer, "Period,Label,Expenses,Savings")
            .map_err(|e| SaverError::Export(e.to_string()))?;

        for point in &self.points {
            writeln!(
                writer,
                "{},{},{},{}",
                self.period,
                point.label,
                point.expenses.to_decimal_string(),
                point.savings.to_decimal_string()
            )
            .map_err(|e| SaverError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
