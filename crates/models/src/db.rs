//! Storage gateway: owns the pooled connection to Postgres.
//!
//! The pool is opened once at startup and the resulting `DatabaseConnection`
//! handle is passed by value into every repository; there is no global
//! connection.
use std::env;
use std::time::Duration;

use common::utils::logging::redact_url;
use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::errors::StorageError;

pub static DATABASE_URL: Lazy<Option<String>> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").ok().filter(|u| !u.trim().is_empty())
});

/// Runtime pool settings, resolved from `configs::DatabaseConfig`.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub sqlx_logging: bool,
}

impl From<&configs::DatabaseConfig> for DatabaseConfig {
    fn from(c: &configs::DatabaseConfig) -> Self {
        Self {
            url: c.url.clone(),
            max_connections: c.max_connections,
            min_connections: c.min_connections,
            connect_timeout: Duration::from_secs(c.connect_timeout_secs),
            acquire_timeout: Duration::from_secs(c.acquire_timeout_secs),
            idle_timeout: Duration::from_secs(c.idle_timeout_secs),
            max_lifetime: Duration::from_secs(c.max_lifetime_secs),
            sqlx_logging: c.sqlx_logging,
        }
    }
}

impl DatabaseConfig {
    /// Default pool settings around `DATABASE_URL`. The URL is used as-is.
    pub fn from_env() -> Self {
        let mut base = configs::DatabaseConfig::default();
        base.url = (*DATABASE_URL).clone().unwrap_or_default();
        Self::from(&base)
    }

    fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url.clone());
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .sqlx_logging(self.sqlx_logging);
        opt
    }
}

/// Open the pool and verify it with a ping. No retries: the first failure is
/// returned to the caller.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, StorageError> {
    if cfg.url.trim().is_empty() {
        return Err(StorageError::InvalidConfig("database url is empty".into()));
    }
    info!(url = %redact_url(&cfg.url), max_connections = cfg.max_connections, "connecting to database");
    let db = Database::connect(cfg.connect_options())
        .await
        .map_err(StorageError::Connect)?;
    ping(&db).await?;
    info!("database connection established");
    Ok(db)
}

/// Connect with default pool settings using `DATABASE_URL`.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::from_env()).await?;
    Ok(db)
}

/// Liveness check used by `GET /health`.
pub async fn ping(db: &DatabaseConnection) -> Result<(), StorageError> {
    db.ping().await.map_err(StorageError::Ping)
}

/// Release every pooled connection. Closing an already-closed pool is a no-op.
pub async fn close(db: &DatabaseConnection) {
    db.get_postgres_connection_pool().close().await;
    info!("database pool closed");
}
