//! Transaction repository for JSON storage
//!
//! Keeps a per-user index so ledger queries do not scan every user's
//! transactions.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Transaction, TransactionId, UserId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of transactions.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence with a per-user index
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
    by_user: RwLock<HashMap<UserId, Vec<TransactionId>>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_user: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk and rebuild the index
    pub fn load(&self) -> FintrackResult<()> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|_| FintrackError::persistence("load transactions", "lock poisoned"))?;
        let mut by_user = self
            .by_user
            .write()
            .map_err(|_| FintrackError::persistence("load transactions", "lock poisoned"))?;

        data.clear();
        by_user.clear();
        for txn in file_data.transactions {
            by_user.entry(txn.user_id).or_default().push(txn.id);
            data.insert(txn.id, txn);
        }
        Ok(())
    }

    /// Save transactions to disk, newest first
    pub fn save(&self) -> FintrackResult<()> {
        let data = self
            .data
            .read()
            .map_err(|_| FintrackError::persistence("save transactions", "lock poisoned"))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    /// All transactions for a user, sorted by date descending
    pub fn get_by_user(&self, user_id: UserId) -> FintrackResult<Vec<Transaction>> {
        let data = self
            .data
            .read()
            .map_err(|_| FintrackError::persistence("read transactions", "lock poisoned"))?;
        let by_user = self
            .by_user
            .read()
            .map_err(|_| FintrackError::persistence("read transactions", "lock poisoned"))?;

        let ids = by_user.get(&user_id).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut transactions: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(transactions)
    }

    /// Number of stored transactions across all users
    pub fn count(&self) -> FintrackResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|_| FintrackError::persistence("read transactions", "lock poisoned"))?;
        Ok(data.len())
    }

    /// Insert a transaction and persist; rolls the insert back if the save
    /// fails
    pub fn insert(&self, txn: Transaction) -> FintrackResult<()> {
        let id = txn.id;
        let user_id = txn.user_id;
        {
            let mut data = self
                .data
                .write()
                .map_err(|_| FintrackError::persistence("insert transaction", "lock poisoned"))?;
            let mut by_user = self
                .by_user
                .write()
                .map_err(|_| FintrackError::persistence("insert transaction", "lock poisoned"))?;
            by_user.entry(user_id).or_default().push(id);
            data.insert(id, txn);
        }

        if let Err(e) = self.save() {
            if let (Ok(mut data), Ok(mut by_user)) = (self.data.write(), self.by_user.write()) {
                data.remove(&id);
                if let Some(ids) = by_user.get_mut(&user_id) {
                    ids.retain(|&tid| tid != id);
                }
            }
            return Err(e);
        }
        Ok(())
    }

    /// Remove all transactions owned by a user (cascade delete); returns the
    /// number removed
    pub fn remove_by_user(&self, user_id: UserId) -> FintrackResult<usize> {
        let removed: Vec<Transaction> = {
            let mut data = self
                .data
                .write()
                .map_err(|_| FintrackError::persistence("remove transactions", "lock poisoned"))?;
            let mut by_user = self
                .by_user
                .write()
                .map_err(|_| FintrackError::persistence("remove transactions", "lock poisoned"))?;

            let ids = by_user.remove(&user_id).unwrap_or_default();
            ids.iter().filter_map(|id| data.remove(id)).collect()
        };

        if removed.is_empty() {
            return Ok(0);
        }
        let count = removed.len();

        if let Err(e) = self.save() {
            if let (Ok(mut data), Ok(mut by_user)) = (self.data.write(), self.by_user.write()) {
                let index = by_user.entry(user_id).or_default();
                for txn in removed {
                    index.push(txn.id);
                    data.insert(txn.id, txn);
                }
            }
            return Err(e);
        }
        Ok(count)
    }
}
