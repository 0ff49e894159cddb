//! Transaction model
//!
//! A transaction records a dated amount against one of the user's
//! categories. The stored amount is always a magnitude; whether it counts
//! as income or expense comes from the category's kind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId, UserId};
use super::money::Money;

/// A single ledger entry
///
/// Transactions are immutable once written; there are no update or delete
/// operations outside of the owning user's cascade delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Owning user
    pub user_id: UserId,

    /// The category this transaction is tagged with; must belong to the
    /// same user
    pub category_id: CategoryId,

    /// Amount magnitude, always non-negative
    pub amount: Money,

    /// Free-form description, empty by default
    #[serde(default)]
    pub description: String,

    /// When the transaction occurred
    pub date: DateTime<Utc>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// The amount is normalized to its absolute value: callers cannot smuggle
    /// direction in through the sign. A missing date defaults to now.
    pub fn new(
        user_id: UserId,
        category_id: CategoryId,
        amount: Money,
        description: impl Into<String>,
        date: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            user_id,
            category_id,
            amount: amount.abs(),
            description: description.into(),
            date: date.unwrap_or(now),
            created_at: now,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.amount,
            self.description
        )
    }
}
