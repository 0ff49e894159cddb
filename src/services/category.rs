//! Category registry service
//!
//! Business logic for the per-user category set: default seeding at
//! registration, explicit creation with duplicate detection, and filtered
//! listing.

use crate::error::{FintrackError, FintrackResult};
use crate::models::{default_categories, Category, CategoryId, CategoryKind, UserId};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create the fixed default category set for a newly registered user
    ///
    /// Called exactly once, at registration. A repeated call finds the
    /// first seeded name already present and fails with `DuplicateCategory`
    /// before anything is written.
    pub fn seed_defaults(&self, user_id: UserId) -> FintrackResult<Vec<Category>> {
        let defaults = default_categories(user_id);

        for category in &defaults {
            if self
                .storage
                .categories
                .find(user_id, &category.name, category.kind)?
                .is_some()
            {
                return Err(FintrackError::DuplicateCategory {
                    name: category.name.clone(),
                    kind: category.kind,
                });
            }
        }

        self.storage.categories.insert_batch(defaults.clone())?;
        log::info!(
            "seeded {} default categories for user {}",
            defaults.len(),
            user_id
        );
        Ok(defaults)
    }

    /// Create a new category
    ///
    /// Fails with `DuplicateCategory` if the user already has a category
    /// with the same name and kind. Not safely retriable on ambiguous
    /// failure; a retry that races a success creates a duplicate attempt
    /// that this check then rejects.
    pub fn add_category(
        &self,
        user_id: UserId,
        name: &str,
        kind: CategoryKind,
    ) -> FintrackResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FintrackError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        if self.storage.categories.find(user_id, name, kind)?.is_some() {
            return Err(FintrackError::DuplicateCategory {
                name: name.to_string(),
                kind,
            });
        }

        let category = Category::new(user_id, name, kind);
        category
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.categories.insert(category.clone())?;
        log::info!("added category {} for user {}", category, user_id);
        Ok(category)
    }

    /// List the user's categories in insertion order, optionally restricted
    /// to income or expense
    pub fn list_categories(
        &self,
        user_id: UserId,
        kind: Option<CategoryKind>,
    ) -> FintrackResult<Vec<Category>> {
        self.storage.categories.list_by_user(user_id, kind)
    }

    /// Look up a category by name and kind
    pub fn find_category(
        &self,
        user_id: UserId,
        name: &str,
        kind: CategoryKind,
    ) -> FintrackResult<Option<Category>> {
        self.storage.categories.find(user_id, name.trim(), kind)
    }

    /// Get a category by id, scoped to its owner
    pub fn get_category(
        &self,
        id: CategoryId,
        user_id: UserId,
    ) -> FintrackResult<Option<Category>> {
        self.storage.categories.get(id, user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (dir, storage)
    }

    #[test]
    fn test_seed_defaults() {
        let (_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let user_id = UserId::new();

        let seeded = service.seed_defaults(user_id).unwrap();
        assert_eq!(seeded.len(), 15);

        let income = service
            .list_categories(user_id, Some(CategoryKind::Income))
            .unwrap();
        let expenses = service
            .list_categories(user_id, Some(CategoryKind::Expense))
            .unwrap();
        assert_eq!(income.len(), 4);
        assert_eq!(expenses.len(), 11);
    }

    #[test]
    fn test_seed_defaults_twice_fails_and_writes_nothing() {
        let (_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let user_id = UserId::new();

        service.seed_defaults(user_id).unwrap();
        let result = service.seed_defaults(user_id);
        assert!(matches!(
            result,
            Err(FintrackError::DuplicateCategory { .. })
        ));

        // No partial second batch
        assert_eq!(service.list_categories(user_id, None).unwrap().len(), 15);
    }

    #[test]
    fn test_add_category() {
        let (_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let user_id = UserId::new();

        let category = service
            .add_category(user_id, "Side Hustle", CategoryKind::Income)
            .unwrap();
        assert_eq!(category.name, "Side Hustle");
        assert!(category.kind.is_income());
    }

    #[test]
    fn test_add_duplicate_category_fails() {
        let (_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let user_id = UserId::new();

        service
            .add_category(user_id, "Food", CategoryKind::Expense)
            .unwrap();
        let result = service.add_category(user_id, "Food", CategoryKind::Expense);
        assert!(matches!(
            result,
            Err(FintrackError::DuplicateCategory { .. })
        ));
        assert_eq!(service.list_categories(user_id, None).unwrap().len(), 1);
    }

    #[test]
    fn test_same_name_different_kind_is_allowed() {
        let (_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let user_id = UserId::new();

        service
            .add_category(user_id, "Gifts", CategoryKind::Income)
            .unwrap();
        service
            .add_category(user_id, "Gifts", CategoryKind::Expense)
            .unwrap();
        assert_eq!(service.list_categories(user_id, None).unwrap().len(), 2);
    }

    #[test]
    fn test_same_category_for_two_users() {
        let (_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let alice = UserId::new();
        let bob = UserId::new();

        service
            .add_category(alice, "Food", CategoryKind::Expense)
            .unwrap();
        service
            .add_category(bob, "Food", CategoryKind::Expense)
            .unwrap();

        assert_eq!(service.list_categories(alice, None).unwrap().len(), 1);
        assert_eq!(service.list_categories(bob, None).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_name_rejected() {
        let (_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let result = service.add_category(UserId::new(), "   ", CategoryKind::Expense);
        assert!(matches!(result, Err(FintrackError::Validation(_))));
    }
}
