use async_trait::async_trait;

use super::domain::Category;
use crate::errors::ServiceError;

/// Persistence operations on the `categories` table.
///
/// Reads report absence as `Ok(None)`; `update` and `delete` report a
/// missing row as [`ServiceError::NotFound`].
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert and return the record with its generated identity.
    async fn create(&self, category: Category) -> Result<Category, ServiceError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Category>, ServiceError>;
    /// All categories ordered by name ascending.
    async fn get_all(&self) -> Result<Vec<Category>, ServiceError>;
    async fn update(&self, category: &Category) -> Result<(), ServiceError>;
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use crate::storage::memory::{foreign_key_violation, SharedTables};

    #[derive(Debug, Default, Clone)]
    pub struct MockCategoryRepository {
        tables: SharedTables,
    }

    impl MockCategoryRepository {
        /// Share `tables` with a `MockServiceRepository` to get joins and
        /// restrict-on-delete.
        pub fn new(tables: SharedTables) -> Self { Self { tables } }

        pub fn tables(&self) -> &SharedTables { &self.tables }
    }

    #[async_trait]
    impl CategoryRepository for MockCategoryRepository {
        async fn create(&self, mut category: Category) -> Result<Category, ServiceError> {
            let mut t = self.tables.lock().await?;
            category.id = t.next_category_id();
            t.categories.insert(category.id, category.clone());
            Ok(category)
        }

        async fn get_by_id(&self, id: i64) -> Result<Option<Category>, ServiceError> {
            let t = self.tables.lock().await?;
            Ok(t.categories.get(&id).cloned())
        }

        async fn get_all(&self) -> Result<Vec<Category>, ServiceError> {
            let t = self.tables.lock().await?;
            let mut all: Vec<Category> = t.categories.values().cloned().collect();
            all.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(all)
        }

        async fn update(&self, category: &Category) -> Result<(), ServiceError> {
            let mut t = self.tables.lock().await?;
            match t.categories.get_mut(&category.id) {
                Some(row) => {
                    *row = category.clone();
                    Ok(())
                }
                None => Err(ServiceError::not_found("category")),
            }
        }

        async fn delete(&self, id: i64) -> Result<(), ServiceError> {
            let mut t = self.tables.lock().await?;
            if !t.categories.contains_key(&id) {
                return Err(ServiceError::not_found("category"));
            }
            if t.category_in_use(id) {
                return Err(foreign_key_violation("services still reference this category"));
            }
            t.categories.remove(&id);
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::errors::ErrorKind;

        #[tokio::test]
        async fn assigns_sequential_ids_and_orders_by_name() {
            let repo = MockCategoryRepository::default();
            let b = repo.create(Category::new("Roofing")).await.unwrap();
            let a = repo.create(Category::new("Electrical")).await.unwrap();
            assert_eq!((b.id, a.id), (1, 2));

            let names: Vec<String> = repo.get_all().await.unwrap().into_iter().map(|c| c.name).collect();
            assert_eq!(names, vec!["Electrical", "Roofing"]);
        }

        #[tokio::test]
        async fn missing_rows_are_none_on_read_and_not_found_on_write() {
            let repo = MockCategoryRepository::default();
            assert!(repo.get_by_id(42).await.unwrap().is_none());

            let mut ghost = Category::new("Ghost");
            ghost.id = 42;
            assert_eq!(repo.update(&ghost).await.unwrap_err().kind(), ErrorKind::NotFound);
            assert_eq!(repo.delete(42).await.unwrap_err().kind(), ErrorKind::NotFound);
        }

        #[tokio::test]
        async fn failing_switch_surfaces_storage_errors() {
            let repo = MockCategoryRepository::default();
            repo.tables().set_failing(true);
            assert_eq!(repo.get_all().await.unwrap_err().kind(), ErrorKind::Storage);
            repo.tables().set_failing(false);
            assert!(repo.get_all().await.unwrap().is_empty());
        }
    }
}
