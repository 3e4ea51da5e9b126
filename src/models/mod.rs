//! Core data models for Expense Saver
//!
//! This module contains the data structures of the tracking domain:
//! entries, savings goals, periods, and the money and time types they use.

pub mod category;
pub mod entry;
pub mod ids;
pub mod money;
pub mod period;
pub mod savings_goal;
pub mod time;
pub mod wire;

pub use category::{categories_for, find_category, EXPENSE_CATEGORIES, SAVING_CATEGORIES};
pub use entry::{Entry, EntryType, EntryValidationError};
pub use ids::{EntryId, GoalId};
pub use money::{Money, MoneyParseError};
pub use period::{DateRange, MonthIndex, Period, PeriodParseError, PeriodType};
pub use savings_goal::{GoalValidationError, SavingsGoal};
pub use time::Timestamp;
pub use wire::{EntryRecord, WireInt, WireOption};
