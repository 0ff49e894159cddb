//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::CategoryKind;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum FintrackError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A user with that username already exists
    #[error("User already exists: {username}")]
    DuplicateUser { username: String },

    /// No user with that identifier
    #[error("User not found: {identifier}")]
    UserNotFound { identifier: String },

    /// A category with the same name and kind already exists for the user
    #[error("Category already exists: {name} ({kind})")]
    DuplicateCategory { name: String, kind: CategoryKind },

    /// The category id is unknown or not owned by the user
    #[error("Invalid category: {identifier}")]
    InvalidCategory { identifier: String },

    /// No goal with that id belongs to the user
    #[error("Goal not found: {identifier}")]
    GoalNotFound { identifier: String },

    /// Underlying storage failure, with the failed operation's context
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl FintrackError {
    /// Create an "invalid category" error
    pub fn invalid_category(identifier: impl Into<String>) -> Self {
        Self::InvalidCategory {
            identifier: identifier.into(),
        }
    }

    /// Create a "goal not found" error
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::GoalNotFound {
            identifier: identifier.into(),
        }
    }

    /// Create a "user not found" error
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::UserNotFound {
            identifier: identifier.into(),
        }
    }

    /// Create a persistence error tagged with the operation that failed
    pub fn persistence(operation: &str, detail: impl std::fmt::Display) -> Self {
        Self::Persistence(format!("{}: {}", operation, detail))
    }

    /// Check if this is a "not found" error (user or goal)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound { .. } | Self::GoalNotFound { .. })
    }

    /// Check if this is a duplicate-entity error
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Self::DuplicateUser { .. } | Self::DuplicateCategory { .. }
        )
    }
}

impl From<std::io::Error> for FintrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FintrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type FintrackResult<T> = Result<T, FintrackError>;
