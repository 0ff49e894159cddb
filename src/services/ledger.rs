//! Ledger service
//!
//! Insertion of transactions with category validation, and retrieval
//! filtered by date range and category. Every returned row carries its
//! category's name and kind so callers never need a second lookup.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Category, CategoryId, CategoryKind, Money, Transaction, TransactionId, UserId};
use crate::storage::Storage;

/// A transaction annotated with its category's name and kind
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    pub id: TransactionId,
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub amount: Money,
    pub description: String,
    pub date: DateTime<Utc>,
    pub category_name: String,
    pub category_kind: CategoryKind,
}

impl LedgerEntry {
    fn from_parts(txn: Transaction, category: &Category) -> Self {
        Self {
            id: txn.id,
            user_id: txn.user_id,
            category_id: txn.category_id,
            amount: txn.amount,
            description: txn.description,
            date: txn.date,
            category_name: category.name.clone(),
            category_kind: category.kind,
        }
    }

    /// Whether this entry counts toward income
    pub fn is_income(&self) -> bool {
        self.category_kind.is_income()
    }
}

/// Options for filtering ledger queries; all bounds are inclusive
#[derive(Debug, Clone, Copy, Default)]
pub struct LedgerFilter {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub category_id: Option<CategoryId>,
}

impl LedgerFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep transactions dated on or after `start`
    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    /// Keep transactions dated on or before `end`
    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    /// Keep transactions tagged with one category
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        if let Some(start) = self.start {
            if txn.date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if txn.date > end {
                return false;
            }
        }
        if let Some(category_id) = self.category_id {
            if txn.category_id != category_id {
                return false;
            }
        }
        true
    }
}

/// Service for the transaction ledger
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a transaction
    ///
    /// The category must belong to the user (`InvalidCategory` otherwise).
    /// The amount is stored as its absolute value; direction always derives
    /// from the category's kind. A missing date defaults to now. Not safely
    /// retriable on ambiguous failure: no idempotency key is carried, so a
    /// blind retry can record the transaction twice.
    pub fn add_transaction(
        &self,
        user_id: UserId,
        amount: Money,
        description: &str,
        category_id: CategoryId,
        date: Option<DateTime<Utc>>,
    ) -> FintrackResult<LedgerEntry> {
        let category = self
            .storage
            .categories
            .get(category_id, user_id)?
            .ok_or_else(|| FintrackError::invalid_category(category_id.to_string()))?;

        let txn = Transaction::new(user_id, category_id, amount, description, date);
        self.storage.transactions.insert(txn.clone())?;

        log::info!(
            "transaction saved: id={}, amount={}, category={}, kind={}",
            txn.id,
            txn.amount,
            category.name,
            category.kind
        );
        Ok(LedgerEntry::from_parts(txn, &category))
    }

    /// Transactions matching the filter, sorted by date descending
    ///
    /// Returns an empty vector rather than an error when nothing matches.
    pub fn get_transactions(
        &self,
        user_id: UserId,
        filter: LedgerFilter,
    ) -> FintrackResult<Vec<LedgerEntry>> {
        let categories: HashMap<CategoryId, Category> = self
            .storage
            .categories
            .list_by_user(user_id, None)?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let transactions = self.storage.transactions.get_by_user(user_id)?;

        Ok(transactions
            .into_iter()
            .filter(|txn| filter.matches(txn))
            .filter_map(|txn| match categories.get(&txn.category_id) {
                Some(category) => Some(LedgerEntry::from_parts(txn, category)),
                None => {
                    // Cannot happen through the public API; insertion
                    // validates ownership and categories only vanish with
                    // the whole user
                    log::warn!("transaction {} references a missing category", txn.id);
                    None
                }
            })
            .collect())
    }
}
