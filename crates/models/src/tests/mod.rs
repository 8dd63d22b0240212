/// Connection gateway tests
pub mod db_tests;


use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use crate::db::{self, DatabaseConfig};

static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Live connection for DB-backed tests, or `None` when no database is configured
/// (or `SKIP_DB_TESTS` is set).
pub(crate) async fn test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || db::DATABASE_URL.is_none() {
        return None;
    }
    let cfg = DatabaseConfig::from_env();
    let migrated = *MIGRATED
        .get_or_init(|| async {
            match db::connect_with_config(&cfg).await {
                Ok(conn) => migration::Migrator::up(&conn, None).await.is_ok(),
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    false
                }
            }
        })
        .await;
    if !migrated {
        return None;
    }
    db::connect_with_config(&cfg).await.ok()
}
