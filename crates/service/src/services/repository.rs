use async_trait::async_trait;

use super::domain::{Service, ServiceDetail};
use crate::errors::ServiceError;

/// Persistence operations on the `services` table.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, service: Service) -> Result<Service, ServiceError>;
    /// Joined with the owning category; `Ok(None)` when absent.
    async fn get_by_id(&self, id: i64) -> Result<Option<ServiceDetail>, ServiceError>;
    /// Services of one category ordered by name; empty when there are none.
    async fn get_by_category(&self, category_id: i64) -> Result<Vec<Service>, ServiceError>;
    /// All services joined with their category name, ordered by service name.
    async fn get_all(&self) -> Result<Vec<ServiceDetail>, ServiceError>;
    async fn update(&self, service: &Service) -> Result<(), ServiceError>;
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use crate::storage::memory::{foreign_key_violation, MemoryTables, SharedTables};

    #[derive(Debug, Default, Clone)]
    pub struct MockServiceRepository {
        tables: SharedTables,
    }

    impl MockServiceRepository {
        pub fn new(tables: SharedTables) -> Self { Self { tables } }

        pub fn tables(&self) -> &SharedTables { &self.tables }
    }

    fn detail(t: &MemoryTables, s: &Service) -> Option<ServiceDetail> {
        t.categories.get(&s.category_id).map(|c| ServiceDetail {
            service: s.clone(),
            category_name: c.name.clone(),
        })
    }

    #[async_trait]
    impl ServiceRepository for MockServiceRepository {
        async fn create(&self, mut service: Service) -> Result<Service, ServiceError> {
            let mut t = self.tables.lock().await?;
            if !t.categories.contains_key(&service.category_id) {
                return Err(foreign_key_violation("category does not exist"));
            }
            service.id = t.next_service_id();
            t.services.insert(service.id, service.clone());
            Ok(service)
        }

        async fn get_by_id(&self, id: i64) -> Result<Option<ServiceDetail>, ServiceError> {
            let t = self.tables.lock().await?;
            Ok(t.services.get(&id).and_then(|s| detail(&t, s)))
        }

        async fn get_by_category(&self, category_id: i64) -> Result<Vec<Service>, ServiceError> {
            let t = self.tables.lock().await?;
            let mut rows: Vec<Service> = t
                .services
                .values()
                .filter(|s| s.category_id == category_id)
                .cloned()
                .collect();
            rows.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(rows)
        }

        async fn get_all(&self) -> Result<Vec<ServiceDetail>, ServiceError> {
            let t = self.tables.lock().await?;
            let mut rows: Vec<ServiceDetail> = t.services.values().filter_map(|s| detail(&t, s)).collect();
            rows.sort_by(|a, b| a.service.name.cmp(&b.service.name));
            Ok(rows)
        }

        async fn update(&self, service: &Service) -> Result<(), ServiceError> {
            let mut t = self.tables.lock().await?;
            if !t.services.contains_key(&service.id) {
                return Err(ServiceError::not_found("service"));
            }
            if !t.categories.contains_key(&service.category_id) {
                return Err(foreign_key_violation("category does not exist"));
            }
            t.services.insert(service.id, service.clone());
            Ok(())
        }

        async fn delete(&self, id: i64) -> Result<(), ServiceError> {
            let mut t = self.tables.lock().await?;
            match t.services.remove(&id) {
                Some(_) => Ok(()),
                None => Err(ServiceError::not_found("service")),
            }
        }
    }

}
