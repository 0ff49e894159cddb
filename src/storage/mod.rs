//! Storage layer for fintrack
//!
//! The persistence collaborator: JSON file storage with atomic writes and
//! one repository per entity. Persisted layout is owned entirely by this
//! module; everything above it works with plain model values.

pub mod categories;
pub mod file_io;
pub mod goals;
pub mod transactions;
pub mod users;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use transactions::TransactionRepository;
pub use users::UserRepository;

use crate::config::paths::FintrackPaths;
use crate::error::FintrackResult;

/// Main storage coordinator that provides access to all repositories
///
/// Services borrow this explicitly per operation; there is no ambient or
/// global handle.
pub struct Storage {
    paths: FintrackPaths,
    pub users: UserRepository,
    pub categories: CategoryRepository,
    pub transactions: TransactionRepository,
    pub goals: GoalRepository,
}

impl Storage {
    /// Create a new Storage instance, ensuring the data directories exist
    pub fn new(paths: FintrackPaths) -> FintrackResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            goals: GoalRepository::new(paths.goals_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> FintrackResult<()> {
        self.users.load()?;
        self.categories.load()?;
        self.transactions.load()?;
        self.goals.load()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        assert!(dir.path().join("data").exists());
        storage.load_all().unwrap();
        assert!(storage.users.get_all().unwrap().is_empty());
    }
}
