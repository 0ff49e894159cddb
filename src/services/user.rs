//! User lifecycle service
//!
//! Registration (which seeds the default categories) and cascade deletion.
//! Passwords are deliberately absent: credential storage belongs to an
//! external collaborator.

use crate::error::{FintrackError, FintrackResult};
use crate::models::{User, UserId};
use crate::services::CategoryService;
use crate::storage::Storage;

/// Service for user management
pub struct UserService<'a> {
    storage: &'a Storage,
}

impl<'a> UserService<'a> {
    /// Create a new user service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new user and seed their default category set
    pub fn register(&self, username: &str) -> FintrackResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(FintrackError::Validation("Username cannot be empty".into()));
        }

        if self.storage.users.find_by_username(username)?.is_some() {
            return Err(FintrackError::DuplicateUser {
                username: username.to_string(),
            });
        }

        let user = User::new(username);
        user.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;
        self.storage.users.insert(user.clone())?;

        // Registration is the single seeding point; if seeding fails the
        // user record is withdrawn so the operation fails as a whole
        if let Err(e) = CategoryService::new(self.storage).seed_defaults(user.id) {
            let _ = self.storage.users.remove(user.id);
            return Err(e);
        }

        log::info!("registered user {} ({})", user.username, user.id);
        Ok(user)
    }

    /// Find a user by username
    pub fn find_user(&self, username: &str) -> FintrackResult<Option<User>> {
        self.storage.users.find_by_username(username.trim())
    }

    /// All users, oldest first
    pub fn list_users(&self) -> FintrackResult<Vec<User>> {
        self.storage.users.get_all()
    }

    /// Delete a user and everything they own
    ///
    /// Owned transactions, goals, and categories are removed before the user
    /// record itself, so a failure partway can never leave entities that
    /// reference a missing owner.
    pub fn delete_user(&self, user_id: UserId) -> FintrackResult<()> {
        let user = self
            .storage
            .users
            .get(user_id)?
            .ok_or_else(|| FintrackError::user_not_found(user_id.to_string()))?;

        let transactions = self.storage.transactions.remove_by_user(user_id)?;
        let goals = self.storage.goals.remove_by_user(user_id)?;
        let categories = self.storage.categories.remove_by_user(user_id)?;
        self.storage.users.remove(user_id)?;

        log::info!(
            "deleted user {} ({} transactions, {} goals, {} categories)",
            user.username,
            transactions,
            goals,
            categories
        );
        Ok(())
    }
}
