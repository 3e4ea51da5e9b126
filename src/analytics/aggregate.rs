//! Category totals, percentage shares and summary figures

use serde::Serialize;

use crate::models::{Entry, EntryType, Money};

/// One category's share of an aggregation set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub value: Money,
    /// Percentage of the set's total; `0` when the total is zero
    pub percentage: f64,
}

/// Per-category totals in first-seen order, skipping uncategorized entries
fn accumulate<'a>(entries: impl Iterator<Item = &'a Entry>) -> Vec<(String, Money)> {
    let mut totals: Vec<(String, Money)> = Vec::new();
    for entry in entries {
        let Some(category) = entry.category_label() else {
            continue;
        };
        match totals.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += entry.amount,
            None => totals.push((category.to_string(), entry.amount)),
        }
    }
    totals
}

/// Sum amounts per category and rank categories by value, largest first
///
/// `entry_type` restricts the set to one type; `None` aggregates both.
/// Ties keep the order in which categories were first seen.
pub fn category_breakdown(entries: &[Entry], entry_type: Option<EntryType>) -> Vec<CategoryShare> {
    let totals = accumulate(
        entries
            .iter()
            .filter(|e| entry_type.map_or(true, |t| e.entry_type == t)),
    );
    let grand_total: Money = totals.iter().map(|(_, v)| *v).sum();

    let mut shares: Vec<CategoryShare> = totals
        .into_iter()
        .map(|(category, value)| CategoryShare {
            percentage: if grand_total.is_positive() {
                value.cents() as f64 / grand_total.cents() as f64 * 100.0
            } else {
                0.0
            },
            category,
            value,
        })
        .collect();

    // sort_by is stable
    shares.sort_by(|a, b| b.value.cmp(&a.value));
    shares
}

/// Category and total, as the dashboard reports them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Totals per category across both entry types, in first-seen order
pub fn category_totals(entries: &[Entry]) -> Vec<CategoryTotal> {
    accumulate(entries.iter())
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect()
}

/// Expense, saving and net totals of a set of entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntrySummary {
    pub total_expenses: Money,
    pub total_savings: Money,
    /// Savings minus expenses
    pub net_balance: Money,
}

impl EntrySummary {
    pub fn from_entries(entries: &[Entry]) -> Self {
        let total_expenses: Money = entries
            .iter()
            .filter(|e| e.is_expense())
            .map(|e| e.amount)
            .sum();
        let total_savings: Money = entries
            .iter()
            .filter(|e| e.is_saving())
            .map(|e| e.amount)
            .sum();

        Self {
            total_expenses,
            total_savings,
            net_balance: total_savings - total_expenses,
        }
    }
}

/// Summary plus per-category totals for a set of entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub summary: EntrySummary,
    pub category_breakdown: Vec<CategoryTotal>,
}

impl Dashboard {
    pub fn from_entries(entries: &[Entry]) -> Self {
        Self {
            summary: EntrySummary::from_entries(entries),
            category_breakdown: category_totals(entries),
        }
    }
}
