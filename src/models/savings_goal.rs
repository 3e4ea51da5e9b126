//! Savings goal model
//!
//! A named target amount with the amount saved so far and an optional
//! deadline.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;
use super::time::Timestamp;

/// A savings target tracked over time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: GoalId,

    /// Display name
    pub name: String,

    /// Amount the goal aims for
    pub target_amount: Money,

    /// Amount saved so far
    pub current_amount: Money,

    /// Optional target date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SavingsGoal {
    /// Create a goal with nothing saved yet
    pub fn new(id: GoalId, name: impl Into<String>, target_amount: Money) -> Self {
        Self {
            id,
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            deadline: None,
            note: None,
        }
    }

    /// Percentage of the target reached; `0` when the target is zero.
    /// Not capped, so overshooting goals report more than 100.
    pub fn progress_percentage(&self) -> f64 {
        if self.target_amount.is_positive() {
            self.current_amount.as_f64() / self.target_amount.as_f64() * 100.0
        } else {
            0.0
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress_percentage() >= 100.0
    }

    /// Amount still needed, never negative
    pub fn remaining(&self) -> Money {
        let remaining = self.target_amount - self.current_amount;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }
        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent(self.current_amount));
        }
        for amount in [self.target_amount, self.current_amount] {
            if !amount.is_within_limit() {
                return Err(GoalValidationError::AmountTooLarge(amount));
            }
        }
        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} of {})",
            self.name, self.current_amount, self.target_amount
        )
    }
}

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
    NegativeCurrent(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(m) => write!(f, "Target amount must be positive, got {}", m),
            Self::NegativeCurrent(m) => write!(f, "Current amount cannot be negative: {}", m),
            Self::AmountTooLarge(m) => {
                write!(f, "Amount {} exceeds the limit of {}", m, Money::MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        let mut goal = SavingsGoal::new(GoalId::new(1), "Laptop", Money::from_cents(100000));
        assert_eq!(goal.progress_percentage(), 0.0);
        assert!(!goal.is_complete());

        goal.current_amount = Money::from_cents(25000);
        assert!((goal.progress_percentage() - 25.0).abs() < 1e-9);
        assert_eq!(goal.remaining(), Money::from_cents(75000));

        goal.current_amount = Money::from_cents(120000);
        assert!(goal.is_complete());
        assert_eq!(goal.remaining(), Money::zero());
    }

    #[test]
    fn test_zero_target_has_zero_progress() {
        let goal = SavingsGoal::new(GoalId::new(1), "Nothing", Money::zero());
        assert_eq!(goal.progress_percentage(), 0.0);
        assert_eq!(
            goal.validate(),
            Err(GoalValidationError::NonPositiveTarget(Money::zero()))
        );
    }

    #[test]
    fn test_validate() {
        let goal = SavingsGoal::new(GoalId::new(1), "  ", Money::from_cents(100));
        assert_eq!(goal.validate(), Err(GoalValidationError::EmptyName));

        let mut goal = SavingsGoal::new(GoalId::new(1), "Trip", Money::from_cents(100));
        goal.current_amount = Money::from_cents(-5);
        assert!(matches!(
            goal.validate(),
            Err(GoalValidationError::NegativeCurrent(_))
        ));

        let goal = SavingsGoal::new(
            GoalId::new(1),
            "Island",
            Money::MAX_AMOUNT + Money::from_cents(1),
        );
        assert!(matches!(
            goal.validate(),
            Err(GoalValidationError::AmountTooLarge(_))
        ));
    }
}
