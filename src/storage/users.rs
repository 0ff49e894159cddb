//! User repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{User, UserId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of users.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    users: Vec<User>,
}

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<HashMap<UserId, User>>,
}

impl UserRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> FintrackResult<()> {
        let file_data: UserData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|_| FintrackError::persistence("load users", "lock poisoned"))?;
        data.clear();
        for user in file_data.users {
            data.insert(user.id, user);
        }
        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> FintrackResult<()> {
        let data = self
            .data
            .read()
            .map_err(|_| FintrackError::persistence("save users", "lock poisoned"))?;

        let mut users: Vec<_> = data.values().cloned().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        write_json_atomic(&self.path, &UserData { users })
    }

    /// Get a user by id
    pub fn get(&self, id: UserId) -> FintrackResult<Option<User>> {
        let data = self
            .data
            .read()
            .map_err(|_| FintrackError::persistence("read users", "lock poisoned"))?;
        Ok(data.get(&id).cloned())
    }

    /// Find a user by username
    pub fn find_by_username(&self, username: &str) -> FintrackResult<Option<User>> {
        let data = self
            .data
            .read()
            .map_err(|_| FintrackError::persistence("read users", "lock poisoned"))?;
        Ok(data.values().find(|u| u.username == username).cloned())
    }

    /// All users, oldest first
    pub fn get_all(&self) -> FintrackResult<Vec<User>> {
        let data = self
            .data
            .read()
            .map_err(|_| FintrackError::persistence("read users", "lock poisoned"))?;
        let mut users: Vec<_> = data.values().cloned().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(users)
    }

    /// Insert a user and persist; rolls the insert back if the save fails
    pub fn insert(&self, user: User) -> FintrackResult<()> {
        let id = user.id;
        {
            let mut data = self
                .data
                .write()
                .map_err(|_| FintrackError::persistence("insert user", "lock poisoned"))?;
            data.insert(id, user);
        }

        if let Err(e) = self.save() {
            if let Ok(mut data) = self.data.write() {
                data.remove(&id);
            }
            return Err(e);
        }
        Ok(())
    }

    /// Remove a user and persist; rolls the removal back if the save fails
    pub fn remove(&self, id: UserId) -> FintrackResult<bool> {
        let removed = {
            let mut data = self
                .data
                .write()
                .map_err(|_| FintrackError::persistence("remove user", "lock poisoned"))?;
            data.remove(&id)
        };

        let Some(user) = removed else {
            return Ok(false);
        };

        if let Err(e) = self.save() {
            if let Ok(mut data) = self.data.write() {
                data.insert(id, user);
            }
            return Err(e);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, UserRepository) {
        let dir = TempDir::new().unwrap();
        let repo = UserRepository::new(dir.path().join("users.json"));
        repo.load().unwrap();
        (dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_dir, repo) = create_test_repo();
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_insert_and_lookup() {
        let (_dir, repo) = create_test_repo();
        let user = User::new("alice");
        let id = user.id;

        repo.insert(user).unwrap();

        assert_eq!(repo.get(id).unwrap().unwrap().username, "alice");
        assert_eq!(
            repo.find_by_username("alice").unwrap().unwrap().id,
            id
        );
        assert!(repo.find_by_username("bob").unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (dir, repo) = create_test_repo();
        let user = User::new("alice");
        let id = user.id;
        repo.insert(user).unwrap();

        let repo2 = UserRepository::new(dir.path().join("users.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(id).unwrap().unwrap().username, "alice");
    }

    #[test]
    fn test_remove() {
        let (_dir, repo) = create_test_repo();
        let user = User::new("alice");
        let id = user.id;
        repo.insert(user).unwrap();

        assert!(repo.remove(id).unwrap());
        assert!(repo.get(id).unwrap().is_none());
        assert!(!repo.remove(id).unwrap());
    }

    #[test]
    fn test_failed_save_rolls_back_the_insert() {
        let dir = TempDir::new().unwrap();
        // A plain file where the data directory should be makes every save fail
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, "").unwrap();
        let repo = UserRepository::new(blocker.join("users.json"));
        repo.load().unwrap();

        let err = repo.insert(User::new("alice")).unwrap_err();
        assert!(matches!(err, crate::error::FintrackError::Persistence(_)));

        // The failed write must not leave the user behind in memory
        assert!(repo.get_all().unwrap().is_empty());
        assert!(repo.find_by_username("alice").unwrap().is_none());
    }
}
