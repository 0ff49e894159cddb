//! Savings goal model
//!
//! Goals track progress toward a target amount. Progress is updated
//! explicitly; there is no automatic accrual from transactions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{GoalId, UserId};
use super::money::Money;

/// A savings goal owned by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Owning user
    pub user_id: UserId,

    /// Goal name; not required to be unique
    pub name: String,

    /// Amount to save toward
    pub target_amount: Money,

    /// Amount saved so far
    pub current_amount: Money,

    /// Optional date the goal should be reached by
    pub deadline: Option<NaiveDate>,

    /// When the goal was created
    pub created_at: DateTime<Utc>,

    /// When the goal was last modified
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new goal with zero progress
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        target_amount: Money,
        deadline: Option<NaiveDate>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            user_id,
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            deadline,
            created_at: now,
            updated_at: now,
        }
    }

    /// Progress toward the target in percent; 0.0 when the target is not
    /// positive
    pub fn progress_percent(&self) -> f64 {
        self.current_amount.percent_of(self.target_amount)
    }

    /// Set the saved amount
    pub fn set_current_amount(&mut self, amount: Money) {
        self.current_amount = amount;
        self.updated_at = Utc::now();
    }

    /// Set the target amount
    pub fn set_target_amount(&mut self, amount: Money) {
        self.target_amount = amount;
        self.updated_at = Utc::now();
    }

    /// Set the deadline
    pub fn set_deadline(&mut self, deadline: NaiveDate) {
        self.deadline = Some(deadline);
        self.updated_at = Utc::now();
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }
        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {} ({:.1}%)",
            self.name,
            self.current_amount,
            self.target_amount,
            self.progress_percent()
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Goal target must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_goal() -> Goal {
        Goal::new(
            UserId::new(),
            "Emergency Fund",
            Money::from_cents(50000),
            None,
        )
    }

    #[test]
    fn test_new_goal_starts_at_zero() {
        let goal = sample_goal();
        assert!(goal.current_amount.is_zero());
        assert_eq!(goal.progress_percent(), 0.0);
        assert!(goal.deadline.is_none());
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_progress_percent() {
        let mut goal = sample_goal();
        goal.set_current_amount(Money::from_cents(12500));
        assert!((goal.progress_percent() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_with_degenerate_target() {
        let mut goal = sample_goal();
        goal.target_amount = Money::zero();
        goal.set_current_amount(Money::from_cents(100));
        assert_eq!(goal.progress_percent(), 0.0);
    }

    #[test]
    fn test_setters_touch_updated_at() {
        let mut goal = sample_goal();
        let before = goal.updated_at;
        goal.set_target_amount(Money::from_cents(60000));
        assert!(goal.updated_at >= before);
        assert_eq!(goal.target_amount.cents(), 60000);
    }

    #[test]
    fn test_validation() {
        let mut goal = sample_goal();
        goal.name = "  ".into();
        assert_eq!(goal.validate(), Err(GoalValidationError::EmptyName));

        goal.name = "Vacation".into();
        goal.target_amount = Money::zero();
        assert!(matches!(
            goal.validate(),
            Err(GoalValidationError::NonPositiveTarget(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let deadline = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        let goal = Goal::new(
            UserId::new(),
            "Vacation",
            Money::from_cents(200000),
            Some(deadline),
        );
        let json = serde_json::to_string(&goal).unwrap();
        let back: Goal = serde_json::from_str(&json).unwrap();
        assert_eq!(goal.id, back.id);
        assert_eq!(back.deadline, Some(deadline));
    }
}
