use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::Category;
use super::repository::CategoryRepository;
use crate::errors::{ErrorContext, ServiceError};

/// Application service encapsulating category business rules.
///
/// Name uniqueness is checked by reading every category before inserting.
/// The check and the insert are not atomic, so two concurrent creates with
/// the same name can both succeed.
pub struct CategoryService<R: CategoryRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CategoryRepository + ?Sized> CategoryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Validate and create a category, returning it with its new identity.
    ///
    /// # Examples
    /// ```
    /// use service::category::{repository::mock::MockCategoryRepository, Category, CategoryService};
    /// use std::sync::Arc;
    /// let svc = CategoryService::new(Arc::new(MockCategoryRepository::default()));
    /// let created = tokio_test::block_on(svc.create_category(Category::new("Plumbing"))).unwrap();
    /// assert!(created.id > 0);
    /// assert!(tokio_test::block_on(svc.create_category(Category::new("Plumbing"))).is_err());
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_category(&self, input: Category) -> Result<Category, ServiceError> {
        if input.name.is_empty() {
            return Err(ServiceError::validation("category name cannot be empty"));
        }

        let existing = self.repo.get_all().await.context("failed to verify category")?;
        if existing.iter().any(|c| c.name == input.name) {
            debug!(name = %input.name, "duplicate category name");
            return Err(ServiceError::Conflict("category name already exists".into()));
        }

        let created = self.repo.create(input).await.context("failed to create category")?;
        info!(category_id = created.id, name = %created.name, "category_created");
        Ok(created)
    }

    /// `Ok(None)` when no category has this identity.
    #[instrument(skip(self))]
    pub async fn get_category(&self, id: i64) -> Result<Option<Category>, ServiceError> {
        self.repo.get_by_id(id).await.context("failed to get category")
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        self.repo.get_all().await.context("failed to list categories")
    }

    /// Overwrite every mutable field of the category identified by `input.id`.
    #[instrument(skip(self, input), fields(category_id = input.id))]
    pub async fn update_category(&self, input: Category) -> Result<(), ServiceError> {
        if input.id == 0 {
            return Err(ServiceError::validation("invalid category ID"));
        }
        self.repo.update(&input).await.context("failed to update category")?;
        info!(category_id = input.id, "category_updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: i64) -> Result<(), ServiceError> {
        if id == 0 {
            return Err(ServiceError::validation("invalid category ID"));
        }
        self.repo.delete(id).await.context("failed to delete category")?;
        info!(category_id = id, "category_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::repository::mock::MockCategoryRepository;
    use crate::errors::ErrorKind;

    fn service() -> (CategoryService<MockCategoryRepository>, Arc<MockCategoryRepository>) {
        let repo = Arc::new(MockCategoryRepository::default());
        (CategoryService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn empty_name_is_rejected_without_writing() {
        let (svc, repo) = service();
        let err = svc.create_category(Category::new("")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "category name cannot be empty");
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_name_conflicts() {
        let (svc, repo) = service();
        svc.create_category(Category::new("Plumbing")).await.unwrap();
        let err = svc.create_category(Category::new("Plumbing")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn uniqueness_is_case_sensitive() {
        let (svc, _) = service();
        svc.create_category(Category::new("Plumbing")).await.unwrap();
        assert!(svc.create_category(Category::new("plumbing")).await.is_ok());
    }

    #[tokio::test]
    async fn created_record_round_trips() {
        let (svc, _) = service();
        let input = Category {
            id: 0,
            name: "Cleaning".into(),
            description: Some("deep and regular".into()),
            is_active: true,
        };
        let created = svc.create_category(input.clone()).await.unwrap();
        let fetched = svc.get_category(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, Category { id: created.id, ..input });
    }

    #[tokio::test]
    async fn missing_category_reads_as_none() {
        let (svc, _) = service();
        assert!(svc.get_category(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_and_delete_guard_zero_id() {
        let (svc, _) = service();
        let err = svc.update_category(Category::new("x")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(svc.delete_category(0).await.unwrap_err().kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn update_and_delete_of_missing_row_fail_with_not_found() {
        let (svc, _) = service();
        let mut ghost = Category::new("Ghost");
        ghost.id = 7;
        let err = svc.update_category(ghost).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "failed to update category: category not found");
        assert_eq!(svc.delete_category(7).await.unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let (svc, _) = service();
        let created = svc.create_category(Category::new("Gardening")).await.unwrap();
        let changed = Category {
            id: created.id,
            name: "Landscaping".into(),
            description: Some("outdoor".into()),
            is_active: true,
        };
        svc.update_category(changed.clone()).await.unwrap();
        assert_eq!(svc.get_category(created.id).await.unwrap().unwrap(), changed);
        svc.delete_category(created.id).await.unwrap();
        assert!(svc.get_category(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn storage_failures_are_wrapped_with_context() {
        let (svc, repo) = service();
        repo.tables().set_failing(true);
        let err = svc.create_category(Category::new("Plumbing")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(err.to_string().starts_with("failed to verify category: "));
        let err = svc.list_categories().await.unwrap_err();
        assert!(err.to_string().starts_with("failed to list categories: "));
    }
}
