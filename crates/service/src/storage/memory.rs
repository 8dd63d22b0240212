use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sea_orm::DbErr;
use tokio::sync::Mutex;

use crate::category::domain::Category;
use crate::errors::ServiceError;
use crate::services::domain::Service;

/// Both catalog tables held in memory. Identities are generated sequentially
/// starting at 1, like a `BIGSERIAL` column.
#[derive(Debug, Default)]
pub struct MemoryTables {
    pub categories: BTreeMap<i64, Category>,
    pub services: BTreeMap<i64, Service>,
    last_category_id: i64,
    last_service_id: i64,
}

impl MemoryTables {
    pub fn next_category_id(&mut self) -> i64 {
        self.last_category_id += 1;
        self.last_category_id
    }

    pub fn next_service_id(&mut self) -> i64 {
        self.last_service_id += 1;
        self.last_service_id
    }

    pub fn category_in_use(&self, category_id: i64) -> bool {
        self.services.values().any(|s| s.category_id == category_id)
    }
}

/// Handle shared by the category and service doubles so that joins and
/// foreign-key checks see the same data.
#[derive(Debug, Clone, Default)]
pub struct SharedTables {
    inner: Arc<Mutex<MemoryTables>>,
    failing: Arc<AtomicBool>,
}

impl SharedTables {
    pub fn new() -> Self { Self::default() }

    /// Lock the tables, or fail like an unreachable backend when
    /// [`SharedTables::set_failing`] is on.
    pub async fn lock(&self) -> Result<tokio::sync::MutexGuard<'_, MemoryTables>, ServiceError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ServiceError::Db(DbErr::Custom("connection refused".into())));
        }
        Ok(self.inner.lock().await)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

pub(crate) fn foreign_key_violation(detail: &str) -> ServiceError {
    ServiceError::Db(DbErr::Custom(format!("foreign key violation: {detail}")))
}
