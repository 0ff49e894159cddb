//! Category model
//!
//! Categories are named buckets that tag transactions as income-producing or
//! expense-producing. A transaction's direction is always derived from its
//! category's kind; the transaction itself stores only a magnitude.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, UserId};

/// Whether a category represents income or an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}

impl CategoryKind {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A transaction category owned by a user
///
/// Invariant: `(user_id, name, kind)` is unique. The kind is fixed at
/// creation; there is deliberately no setter, so historical summaries can
/// never drift retroactively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Owning user
    pub user_id: UserId,

    /// Category name
    pub name: String,

    /// Income or expense
    pub kind: CategoryKind,

    /// When the category was created
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category
    pub fn new(user_id: UserId, name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: CategoryId::new(),
            user_id,
            name: name.into(),
            kind,
            created_at: Utc::now(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }
        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// Default income category names seeded at registration
pub const DEFAULT_INCOME_CATEGORIES: [&str; 4] =
    ["Salary", "Investments", "Gifts", "Other Income"];

/// Default expense category names seeded at registration
pub const DEFAULT_EXPENSE_CATEGORIES: [&str; 11] = [
    "Housing",
    "Food",
    "Transportation",
    "Utilities",
    "Healthcare",
    "Entertainment",
    "Education",
    "Shopping",
    "Savings",
    "Debt Payments",
    "Miscellaneous",
];

/// Build the default category set for a newly registered user
pub fn default_categories(user_id: UserId) -> Vec<Category> {
    DEFAULT_INCOME_CATEGORIES
        .iter()
        .map(|name| Category::new(user_id, *name, CategoryKind::Income))
        .chain(
            DEFAULT_EXPENSE_CATEGORIES
                .iter()
                .map(|name| Category::new(user_id, *name, CategoryKind::Expense)),
        )
        .collect()
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
