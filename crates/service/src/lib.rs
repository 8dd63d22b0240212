//! Service layer coordinating validation and persistence for the catalog.
//! - Separates business rules from data access (repository traits).
//! - Ships sea-orm and in-memory implementations of every repository.
//! - Provides one error taxonomy shared by all layers.

pub mod errors;
pub mod category;
pub mod services;
pub mod health;
pub mod storage;
#[cfg(test)]
pub mod test_support;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use category::{repo::seaorm::SeaOrmCategoryRepository, repository::mock::MockCategoryRepository, CategoryRepository, CategoryService};
use health::{mock::MockHealth, DatabaseHealth, HealthCheck};
use services::{repo::seaorm::SeaOrmServiceRepository, repository::mock::MockServiceRepository, ServiceRepository, ServiceService};
use storage::memory::SharedTables;

pub type DynCategoryService = CategoryService<dyn CategoryRepository>;
pub type DynServiceService = ServiceService<dyn ServiceRepository, dyn CategoryRepository>;

/// Coordinators and health probe wired over one backend.
#[derive(Clone)]
pub struct Catalog {
    pub categories: Arc<DynCategoryService>,
    pub services: Arc<DynServiceService>,
    pub health: Arc<dyn HealthCheck>,
}

impl Catalog {
    fn wire(
        category_repo: Arc<dyn CategoryRepository>,
        service_repo: Arc<dyn ServiceRepository>,
        health: Arc<dyn HealthCheck>,
    ) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(Arc::clone(&category_repo))),
            services: Arc::new(ServiceService::new(service_repo, category_repo)),
            health,
        }
    }

    /// Repositories over the pooled Postgres connection.
    pub fn with_database(db: DatabaseConnection) -> Self {
        Self::wire(
            Arc::new(SeaOrmCategoryRepository::new(db.clone())),
            Arc::new(SeaOrmServiceRepository::new(db.clone())),
            Arc::new(DatabaseHealth::new(db)),
        )
    }

    /// In-memory repositories sharing `tables`.
    pub fn in_memory(tables: SharedTables) -> Self {
        Self::wire(
            Arc::new(MockCategoryRepository::new(tables.clone())),
            Arc::new(MockServiceRepository::new(tables.clone())),
            Arc::new(MockHealth::new(tables)),
        )
    }
}
