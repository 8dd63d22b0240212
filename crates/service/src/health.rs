//! Backend liveness probe behind `GET /health`.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> Result<(), ServiceError>;
}

/// Pings the pooled Postgres connection.
#[derive(Clone)]
pub struct DatabaseHealth {
    pub db: DatabaseConnection,
}

impl DatabaseHealth {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl HealthCheck for DatabaseHealth {
    async fn ping(&self) -> Result<(), ServiceError> {
        models::db::ping(&self.db).await?;
        Ok(())
    }
}

pub mod mock {
    use super::*;
    use crate::storage::memory::SharedTables;

    /// Healthy unless the shared in-memory tables are switched to failing.
    #[derive(Debug, Default, Clone)]
    pub struct MockHealth {
        tables: SharedTables,
    }

    impl MockHealth {
        pub fn new(tables: SharedTables) -> Self { Self { tables } }
    }

    #[async_trait]
    impl HealthCheck for MockHealth {
        async fn ping(&self) -> Result<(), ServiceError> {
            let _ = self.tables.lock().await?;
            Ok(())
        }
    }

}
