//! Goal repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Goal, GoalId, UserId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of goals.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    goals: Vec<Goal>,
}

/// Repository for goal persistence
pub struct GoalRepository {
    path: PathBuf,
    data: RwLock<HashMap<GoalId, Goal>>,
}

impl GoalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load goals from disk
    pub fn load(&self) -> FintrackResult<()> {
        let file_data: GoalData = read_json(&self.path)?;
        let mut data = self
            .data
            .write()
            .map_err(|_| FintrackError::persistence("load goals", "lock poisoned"))?;
        data.clear();
        for goal in file_data.goals {
            data.insert(goal.id, goal);
        }
        Ok(())
    }

    /// Save goals to disk
    pub fn save(&self) -> FintrackResult<()> {
        let data = self
            .data
            .read()
            .map_err(|_| FintrackError::persistence("save goals", "lock poisoned"))?;
        let mut goals: Vec<_> = data.values().cloned().collect();
        goals.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        write_json_atomic(&self.path, &GoalData { goals })
    }

    /// Get a goal by id
    pub fn get(&self, id: GoalId) -> FintrackResult<Option<Goal>> {
        let data = self
            .data
            .read()
            .map_err(|_| FintrackError::persistence("read goals", "lock poisoned"))?;
        Ok(data.get(&id).cloned())
    }

    /// All goals owned by a user, oldest first
    pub fn get_by_user(&self, user_id: UserId) -> FintrackResult<Vec<Goal>> {
        let data = self
            .data
            .read()
            .map_err(|_| FintrackError::persistence("read goals", "lock poisoned"))?;
        let mut goals: Vec<_> = data
            .values()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect();
        goals.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(goals)
    }

    /// Insert a goal and persist; rolls the insert back if the save fails
    pub fn insert(&self, goal: Goal) -> FintrackResult<()> {
        let id = goal.id;
        {
            let mut data = self
                .data
                .write()
                .map_err(|_| FintrackError::persistence("insert goal", "lock poisoned"))?;
            data.insert(id, goal);
        }

        if let Err(e) = self.save() {
            if let Ok(mut data) = self.data.write() {
                data.remove(&id);
            }
            return Err(e);
        }
        Ok(())
    }

    /// Replace an existing goal and persist; restores the previous record if
    /// the save fails
    pub fn update(&self, goal: Goal) -> FintrackResult<()> {
        let id = goal.id;
        let previous = {
            let mut data = self
                .data
                .write()
                .map_err(|_| FintrackError::persistence("update goal", "lock poisoned"))?;
            data.insert(id, goal)
        };

        if let Err(e) = self.save() {
            if let Ok(mut data) = self.data.write() {
                match previous {
                    Some(old) => {
                        data.insert(id, old);
                    }
                    None => {
                        data.remove(&id);
                    }
                }
            }
            return Err(e);
        }
        Ok(())
    }

    /// Remove all goals owned by a user (cascade delete); returns the number
    /// removed
    pub fn remove_by_user(&self, user_id: UserId) -> FintrackResult<usize> {
        let removed: Vec<Goal> = {
            let mut data = self
                .data
                .write()
                .map_err(|_| FintrackError::persistence("remove goals", "lock poisoned"))?;
            let ids: Vec<GoalId> = data
                .values()
                .filter(|g| g.user_id == user_id)
                .map(|g| g.id)
                .collect();
            ids.iter().filter_map(|id| data.remove(id)).collect()
        };

        if removed.is_empty() {
            return Ok(0);
        }
        let count = removed.len();

        if let Err(e) = self.save() {
            if let Ok(mut data) = self.data.write() {
                for goal in removed {
                    data.insert(goal.id, goal);
                }
            }
            return Err(e);
        }
        Ok(count)
    }
}
