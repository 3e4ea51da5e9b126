//! Entry model
//!
//! An entry is a single recorded expense or saving: an amount on a date,
//! optionally tagged with a category and a free-text note.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::EntryId;
use super::money::Money;
use super::time::Timestamp;

/// Whether money left the wallet or was put aside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Expense,
    Saving,
}

impl EntryType {
    /// Lowercase wire name ("expense")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Saving => "saving",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => f.pad("Expense"),
            Self::Saving => f.pad("Saving"),
        }
    }
}

impl FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expense" | "expenses" => Ok(Self::Expense),
            "saving" | "savings" => Ok(Self::Saving),
            other => Err(format!("Unknown entry type '{}'. Use expense or saving", other)),
        }
    }
}

/// A recorded expense or saving
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,

    /// Expense or saving
    pub entry_type: EntryType,

    /// When the entry happened
    pub date: Timestamp,

    /// Amount (never negative)
    pub amount: Money,

    /// Optional category label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Entry {
    /// Create a new entry without category or note
    pub fn new(id: EntryId, entry_type: EntryType, date: Timestamp, amount: Money) -> Self {
        Self {
            id,
            entry_type,
            date,
            amount,
            category: None,
            note: None,
        }
    }

    /// Builder-style category setter
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder-style note setter
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn is_expense(&self) -> bool {
        self.entry_type == EntryType::Expense
    }

    pub fn is_saving(&self) -> bool {
        self.entry_type == EntryType::Saving
    }

    /// Category as a non-empty string, if any
    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.amount.is_negative() {
            return Err(EntryValidationError::NegativeAmount(self.amount));
        }
        if !self.amount.is_within_limit() {
            return Err(EntryValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.entry_type,
            self.amount,
            self.category_label().unwrap_or("(uncategorized)")
        )
    }
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Entry amount cannot be negative: {}", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Entry amount {} exceeds the limit of {}",
                amount,
                Money::MAX_AMOUNT
            ),
        }
    }
}

impl std::error::Error for EntryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Entry {
        Entry::new(
            EntryId::new(1),
            EntryType::Expense,
            Timestamp::from_nanos(1_736_899_200_000_000_000),
            Money::from_cents(10000),
        )
    }

    #[test]
    fn test_builders() {
        let entry = sample().with_category("Food").with_note("lunch");
        assert_eq!(entry.category_label(), Some("Food"));
        assert_eq!(entry.note.as_deref(), Some("lunch"));
        assert!(entry.is_expense());
        assert!(!entry.is_saving());
    }

    #[test]
    fn test_empty_category_is_no_category() {
        let entry = sample().with_category("");
        assert_eq!(entry.category_label(), None);
    }

    #[test]
    fn test_validate_rejects_negative() {
        let mut entry = sample();
        assert!(entry.validate().is_ok());
        entry.amount = Money::from_cents(-1);
        assert_eq!(
            entry.validate(),
            Err(EntryValidationError::NegativeAmount(Money::from_cents(-1)))
        );
    }

    #[test]
    fn test_entry_type_parse() {
        assert_eq!("Expense".parse::<EntryType>().unwrap(), EntryType::Expense);
        assert_eq!("savings".parse::<EntryType>().unwrap(), EntryType::Saving);
        assert!("income".parse::<EntryType>().is_err());
    }

    #[test]
    fn test_serialization() {
        let entry = sample().with_category("Food");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["entry_type"], "expense");
        assert_eq!(json["amount"], 10000);
        assert!(json.get("note").is_none());

        let back: Entry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
