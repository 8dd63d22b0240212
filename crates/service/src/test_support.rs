#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Connection for DB-backed tests. `Ok(None)` means no database is configured
/// (no `DATABASE_URL`, or `SKIP_DB_TESTS` set) and the test should return early.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || models::db::DATABASE_URL.is_none() {
        return Ok(None);
    }

    // Run migrations exactly once, with a throwaway connection
    let cfg = DatabaseConfig::from_env();
    MIGRATED
        .get_or_try_init(|| async {
            let db = connect_with_config(&cfg).await?;
            migration::Migrator::up(&db, None).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    // Return a fresh connection for the current test's runtime
    let mut cfg = cfg;
    cfg.max_connections = cfg.max_connections.min(5);
    cfg.acquire_timeout = std::time::Duration::from_secs(10);
    Ok(Some(connect_with_config(&cfg).await?))
}
