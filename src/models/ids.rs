//! Strongly-typed ID wrappers
//!
//! Identifiers are sequential numbers assigned by the store. Newtype
//! wrappers keep entry and goal IDs from being mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw numeric ID
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the underlying number
            pub const fn get(&self) -> u64 {
                self.0
            }

            /// The ID that follows this one
            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(EntryId, "#");
define_id!(GoalId, "goal-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(EntryId::new(7).to_string(), "#7");
        assert_eq!(GoalId::new(3).to_string(), "goal-3");
    }

    #[test]
    fn test_id_parse_with_and_without_prefix() {
        assert_eq!("12".parse::<EntryId>().unwrap(), EntryId::new(12));
        assert_eq!("#12".parse::<EntryId>().unwrap(), EntryId::new(12));
        assert_eq!("goal-4".parse::<GoalId>().unwrap(), GoalId::new(4));
        assert!("abc".parse::<EntryId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = EntryId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        let deserialized: EntryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_next() {
        assert_eq!(EntryId::new(1).next(), EntryId::new(2));
    }
}
