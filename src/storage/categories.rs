//! Category repository for JSON storage
//!
//! Categories are stored as a plain vector so that listing preserves
//! insertion order, which is the contract for `list_categories`.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Category, CategoryId, CategoryKind, UserId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of categories.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CategoryData {
    categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    data: RwLock<Vec<Category>>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> FintrackResult<()> {
        let file_data: CategoryData = read_json(&self.path)?;
        let mut data = self
            .data
            .write()
            .map_err(|_| FintrackError::persistence("load categories", "lock poisoned"))?;
        *data = file_data.categories;
        Ok(())
    }

    /// Save categories to disk, preserving insertion order
    pub fn save(&self) -> FintrackResult<()> {
        let data = self
            .data
            .read()
            .map_err(|_| FintrackError::persistence("save categories", "lock poisoned"))?;
        write_json_atomic(
            &self.path,
            &CategoryData {
                categories: data.clone(),
            },
        )
    }

    /// Categories owned by a user, optionally restricted to one kind,
    /// in insertion order
    pub fn list_by_user(
        &self,
        user_id: UserId,
        kind: Option<CategoryKind>,
    ) -> FintrackResult<Vec<Category>> {
        let data = self
            .data
            .read()
            .map_err(|_| FintrackError::persistence("read categories", "lock poisoned"))?;
        Ok(data
            .iter()
            .filter(|c| c.user_id == user_id)
            .filter(|c| kind.map_or(true, |k| c.kind == k))
            .cloned()
            .collect())
    }

    /// Look up a category by its unique `(user, name, kind)` triple
    pub fn find(
        &self,
        user_id: UserId,
        name: &str,
        kind: CategoryKind,
    ) -> FintrackResult<Option<Category>> {
        let data = self
            .data
            .read()
            .map_err(|_| FintrackError::persistence("read categories", "lock poisoned"))?;
        Ok(data
            .iter()
            .find(|c| c.user_id == user_id && c.name == name && c.kind == kind)
            .cloned())
    }

    /// Get a category by id, scoped to its owner
    pub fn get(&self, id: CategoryId, user_id: UserId) -> FintrackResult<Option<Category>> {
        let data = self
            .data
            .read()
            .map_err(|_| FintrackError::persistence("read categories", "lock poisoned"))?;
        Ok(data
            .iter()
            .find(|c| c.id == id && c.user_id == user_id)
            .cloned())
    }

    /// Insert one category and persist; rolls back on save failure
    pub fn insert(&self, category: Category) -> FintrackResult<()> {
        self.insert_batch(vec![category])
    }

    /// Insert several categories and persist them with a single write;
    /// either all of them land on disk or none do
    pub fn insert_batch(&self, categories: Vec<Category>) -> FintrackResult<()> {
        let inserted = categories.len();
        {
            let mut data = self
                .data
                .write()
                .map_err(|_| FintrackError::persistence("insert categories", "lock poisoned"))?;
            data.extend(categories);
        }

        if let Err(e) = self.save() {
            if let Ok(mut data) = self.data.write() {
                let len = data.len();
                data.truncate(len - inserted);
            }
            return Err(e);
        }
        Ok(())
    }

    /// Remove all categories owned by a user (cascade delete); returns the
    /// number removed
    pub fn remove_by_user(&self, user_id: UserId) -> FintrackResult<usize> {
        let removed: Vec<Category> = {
            let mut data = self
                .data
                .write()
                .map_err(|_| FintrackError::persistence("remove categories", "lock poisoned"))?;
            let (mine, rest): (Vec<_>, Vec<_>) =
                data.drain(..).partition(|c| c.user_id == user_id);
            *data = rest;
            mine
        };

        if removed.is_empty() {
            return Ok(0);
        }
        let count = removed.len();

        if let Err(e) = self.save() {
            if let Ok(mut data) = self.data.write() {
                data.extend(removed);
            }
            return Err(e);
        }
        Ok(count)
    }
}
