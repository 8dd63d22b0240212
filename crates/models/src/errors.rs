use sea_orm::DbErr;
use thiserror::Error;

/// Failures of the connection gateway itself (as opposed to a single query).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid database configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to connect to database: {0}")]
    Connect(#[source] DbErr),
    #[error("database ping failed: {0}")]
    Ping(#[source] DbErr),
}
