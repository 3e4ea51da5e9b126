//! Backend-shaped records
//!
//! The remote backend exchanges entries with optional fields encoded as
//! `{"__kind__": "Some", "value": v}` / `{"__kind__": "None"}` and 64-bit
//! integers that may arrive either as JSON numbers or as decimal strings.
//! These types read that shape and convert it into the crate's own models.
//! Optional text fields are also read when given as a bare string or null.

use serde::{Deserialize, Deserializer, Serialize};

use super::entry::{Entry, EntryType};
use super::ids::EntryId;
use super::money::Money;
use super::time::Timestamp;

/// Optional value as encoded at the backend boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "__kind__", content = "value")]
pub enum WireOption<T> {
    Some(T),
    None,
}

impl<T> WireOption<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            WireOption::Some(value) => Some(value),
            WireOption::None => None,
        }
    }
}

impl<T> Default for WireOption<T> {
    fn default() -> Self {
        WireOption::None
    }
}

/// Either form an optional text field may arrive in
#[derive(Deserialize)]
#[serde(untagged)]
enum OptionalText {
    Tagged(WireOption<String>),
    Plain(Option<String>),
}

fn optional_text<'de, D>(deserializer: D) -> Result<WireOption<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OptionalText::deserialize(deserializer)? {
        OptionalText::Tagged(value) => value,
        OptionalText::Plain(value) => value.into(),
    })
}

impl<T> From<Option<T>> for WireOption<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => WireOption::Some(v),
            None => WireOption::None,
        }
    }
}

impl<T> From<WireOption<T>> for Option<T> {
    fn from(value: WireOption<T>) -> Self {
        value.into_option()
    }
}

/// A 64-bit integer that may be serialized as a number or a string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireInt {
    Number(i64),
    Text(String),
}

impl WireInt {
    /// Numeric value, `None` if the text form does not parse
    pub fn value(&self) -> Option<i64> {
        match self {
            WireInt::Number(n) => Some(*n),
            WireInt::Text(s) => s.trim().trim_end_matches('n').parse().ok(),
        }
    }
}

impl From<i64> for WireInt {
    fn from(value: i64) -> Self {
        WireInt::Number(value)
    }
}

/// An entry as returned by the backend's `getEntries`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    pub id: WireInt,
    pub entry_type: EntryType,
    pub date: WireInt,
    pub amount: f64,
    #[serde(default, deserialize_with = "optional_text")]
    pub category: WireOption<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub note: WireOption<String>,
}

impl EntryRecord {
    /// Convert into a domain entry
    ///
    /// Fails if the ID or date is not an integer, the ID is negative, or
    /// the amount is negative, not finite or above `Money::MAX_AMOUNT`.
    pub fn into_entry(self) -> Result<Entry, String> {
        let id = self
            .id
            .value()
            .and_then(|id| u64::try_from(id).ok())
            .ok_or_else(|| format!("invalid entry id: {:?}", self.id))?;
        let date = self
            .date
            .value()
            .ok_or_else(|| format!("invalid date for entry {}: {:?}", id, self.date))?;
        let amount = Money::from_f64(self.amount)
            .filter(|m| !m.is_negative() && m.is_within_limit())
            .ok_or_else(|| format!("invalid amount for entry {}: {}", id, self.amount))?;

        Ok(Entry {
            id: EntryId::new(id),
            entry_type: self.entry_type,
            date: Timestamp::from_nanos(date),
            amount,
            category: self.category.into_option(),
            note: self.note.into_option(),
        })
    }
}

impl From<&Entry> for EntryRecord {
    fn from(entry: &Entry) -> Self {
        Self {
            id: WireInt::Text(entry.id.get().to_string()),
            entry_type: entry.entry_type,
            date: WireInt::Number(entry.date.nanos()),
            amount: entry.amount.as_f64(),
            category: entry.category.clone().into(),
            note: entry.note.clone().into(),
        }
    }
}
