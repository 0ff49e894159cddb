//! Goal tracker service
//!
//! Savings goals are independent of the ledger: progress only moves through
//! explicit updates, never by accruing transactions.

use chrono::NaiveDate;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Goal, GoalId, Money, UserId};
use crate::storage::Storage;

/// Service for savings goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new goal with zero progress
    ///
    /// Goal names are not required to be unique. Not safely retriable on
    /// ambiguous failure for the same reason as transactions: a blind retry
    /// creates a second goal.
    pub fn add_goal(
        &self,
        user_id: UserId,
        name: &str,
        target_amount: Money,
        deadline: Option<NaiveDate>,
    ) -> FintrackResult<Goal> {
        let goal = Goal::new(user_id, name.trim(), target_amount, deadline);
        goal.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.goals.insert(goal.clone())?;
        log::info!("added goal {} for user {}", goal.name, user_id);
        Ok(goal)
    }

    /// Apply a partial update to a goal
    ///
    /// Only the fields passed as `Some` are touched; `None` means "leave
    /// unchanged" and is distinct from zero. Fails with `GoalNotFound` when
    /// the id does not resolve to a goal owned by the user.
    pub fn update_goal(
        &self,
        user_id: UserId,
        goal_id: GoalId,
        current_amount: Option<Money>,
        target_amount: Option<Money>,
        deadline: Option<NaiveDate>,
    ) -> FintrackResult<Goal> {
        let mut goal = self
            .storage
            .goals
            .get(goal_id)?
            .filter(|g| g.user_id == user_id)
            .ok_or_else(|| FintrackError::goal_not_found(goal_id.to_string()))?;

        if let Some(amount) = current_amount {
            goal.set_current_amount(amount);
        }
        if let Some(amount) = target_amount {
            goal.set_target_amount(amount);
        }
        if let Some(date) = deadline {
            goal.set_deadline(date);
        }

        goal.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.goals.update(goal.clone())?;
        log::info!(
            "updated goal {}: {:.1}% of {}",
            goal.name,
            goal.progress_percent(),
            goal.target_amount
        );
        Ok(goal)
    }

    /// All goals owned by the user
    pub fn list_goals(&self, user_id: UserId) -> FintrackResult<Vec<Goal>> {
        self.storage.goals.get_by_user(user_id)
    }

    /// Resolve a goal from an id string (full UUID or the short `goal-`
    /// display form) or, failing that, an exact name match
    pub fn find_goal(&self, user_id: UserId, identifier: &str) -> FintrackResult<Option<Goal>> {
        let goals = self.list_goals(user_id)?;

        if let Ok(id) = identifier.parse::<GoalId>() {
            return Ok(goals.into_iter().find(|g| g.id == id));
        }

        Ok(goals
            .into_iter()
            .find(|g| g.id.to_string() == identifier || g.name == identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (dir, storage)
    }

    #[test]
    fn test_add_goal_starts_at_zero() {
        let (_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);
        let user_id = UserId::new();

        let goal = service
            .add_goal(user_id, "Emergency Fund", Money::from_cents(50000), None)
            .unwrap();
        assert!(goal.current_amount.is_zero());
        assert_eq!(goal.progress_percent(), 0.0);
    }

    #[test]
    fn test_duplicate_names_are_allowed() {
        let (_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);
        let user_id = UserId::new();

        service
            .add_goal(user_id, "Vacation", Money::from_cents(100), None)
            .unwrap();
        service
            .add_goal(user_id, "Vacation", Money::from_cents(200), None)
            .unwrap();
        assert_eq!(service.list_goals(user_id).unwrap().len(), 2);
    }

    #[test]
    fn test_update_progress() {
        let (_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);
        let user_id = UserId::new();

        let goal = service
            .add_goal(user_id, "Vacation", Money::from_cents(50000), None)
            .unwrap();
        let updated = service
            .update_goal(user_id, goal.id, Some(Money::from_cents(12500)), None, None)
            .unwrap();

        assert!((updated.progress_percent() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_update_leaves_other_fields_alone() {
        let (_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);
        let user_id = UserId::new();
        let deadline = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

        let goal = service
            .add_goal(user_id, "Vacation", Money::from_cents(50000), Some(deadline))
            .unwrap();
        let updated = service
            .update_goal(user_id, goal.id, Some(Money::from_cents(100)), None, None)
            .unwrap();

        assert_eq!(updated.target_amount.cents(), 50000);
        assert_eq!(updated.deadline, Some(deadline));
        assert_eq!(updated.current_amount.cents(), 100);
    }

    #[test]
    fn test_update_unknown_goal_fails() {
        let (_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let result = service.update_goal(
            UserId::new(),
            GoalId::new(),
            Some(Money::from_cents(1)),
            None,
            None,
        );
        assert!(matches!(result, Err(FintrackError::GoalNotFound { .. })));
    }

    #[test]
    fn test_update_foreign_goal_fails() {
        let (_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);
        let alice = UserId::new();
        let bob = UserId::new();

        let goal = service
            .add_goal(alice, "Vacation", Money::from_cents(100), None)
            .unwrap();
        let result = service.update_goal(bob, goal.id, Some(Money::from_cents(1)), None, None);
        assert!(matches!(result, Err(FintrackError::GoalNotFound { .. })));
    }

    #[test]
    fn test_non_positive_target_rejected() {
        let (_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);
        let user_id = UserId::new();

        let result = service.add_goal(user_id, "Broken", Money::zero(), None);
        assert!(matches!(result, Err(FintrackError::Validation(_))));

        let goal = service
            .add_goal(user_id, "Vacation", Money::from_cents(100), None)
            .unwrap();
        let result = service.update_goal(user_id, goal.id, None, Some(Money::zero()), None);
        assert!(matches!(result, Err(FintrackError::Validation(_))));
    }

    #[test]
    fn test_find_goal_by_name_and_id() {
        let (_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);
        let user_id = UserId::new();

        let goal = service
            .add_goal(user_id, "Vacation", Money::from_cents(100), None)
            .unwrap();

        let by_name = service.find_goal(user_id, "Vacation").unwrap().unwrap();
        assert_eq!(by_name.id, goal.id);

        let by_short_id = service
            .find_goal(user_id, &goal.id.to_string())
            .unwrap()
            .unwrap();
        assert_eq!(by_short_id.id, goal.id);

        assert!(service.find_goal(user_id, "Nope").unwrap().is_none());
    }
}
