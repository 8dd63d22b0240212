use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::{Service, ServiceDetail};
use super::repository::ServiceRepository;
use crate::category::repository::CategoryRepository;
use crate::errors::{ErrorContext, ServiceError};

/// Application service for catalog services.
///
/// Creation requires the referenced category to exist. Updates overwrite the
/// category reference as given and do not look the category up again.
pub struct ServiceService<S, C>
where
    S: ServiceRepository + ?Sized,
    C: CategoryRepository + ?Sized,
{
    services: Arc<S>,
    categories: Arc<C>,
}

impl<S, C> ServiceService<S, C>
where
    S: ServiceRepository + ?Sized,
    C: CategoryRepository + ?Sized,
{
    pub fn new(services: Arc<S>, categories: Arc<C>) -> Self { Self { services, categories } }

    /// Validate and create a service.
    ///
    /// A category that cannot be loaded aborts creation whether it is absent
    /// or the lookup itself failed; both surface as `InvalidCategory`.
    #[instrument(skip(self, input), fields(category_id = input.category_id, name = %input.name))]
    pub async fn create_service(&self, input: Service) -> Result<Service, ServiceError> {
        if input.category_id == 0 {
            return Err(ServiceError::validation("category ID is required"));
        }

        match self.categories.get_by_id(input.category_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(ServiceError::InvalidCategory(Box::new(ServiceError::not_found("category")))),
            Err(e) => {
                warn!(error = %e, "category lookup failed");
                return Err(ServiceError::InvalidCategory(Box::new(e)));
            }
        }

        if input.name.is_empty() {
            return Err(ServiceError::validation("service name cannot be empty"));
        }

        let created = self.services.create(input).await.context("failed to create service")?;
        info!(service_id = created.id, category_id = created.category_id, "service_created");
        Ok(created)
    }

    /// `Ok(None)` when no service has this identity.
    #[instrument(skip(self))]
    pub async fn get_service(&self, id: i64) -> Result<Option<ServiceDetail>, ServiceError> {
        self.services.get_by_id(id).await.context("failed to get service")
    }

    pub async fn list_services(&self) -> Result<Vec<ServiceDetail>, ServiceError> {
        self.services.get_all().await.context("failed to list services")
    }

    #[instrument(skip(self))]
    pub async fn list_services_by_category(&self, category_id: i64) -> Result<Vec<Service>, ServiceError> {
        self.services
            .get_by_category(category_id)
            .await
            .context("failed to list services by category")
    }

    #[instrument(skip(self, input), fields(service_id = input.id))]
    pub async fn update_service(&self, input: Service) -> Result<(), ServiceError> {
        if input.id == 0 {
            return Err(ServiceError::validation("invalid service ID"));
        }
        self.services.update(&input).await.context("failed to update service")?;
        info!(service_id = input.id, category_id = input.category_id, "service_updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_service(&self, id: i64) -> Result<(), ServiceError> {
        if id == 0 {
            return Err(ServiceError::validation("invalid service ID"));
        }
        self.services.delete(id).await.context("failed to delete service")?;
        info!(service_id = id, "service_deleted");
        Ok(())
    }
}
