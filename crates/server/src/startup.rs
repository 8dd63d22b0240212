use std::time::Duration;

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use models::db::{self, DatabaseConfig};
use sea_orm::DatabaseConnection;
use service::Catalog;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Apply pending schema migrations. Any failure aborts startup.
async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
    let pending = Migrator::get_pending_migrations(db).await?.len();
    info!(pending, "applying database migrations");
    Migrator::up(db, None).await?;
    info!("database schema up to date");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl+C, shutting down"),
        Err(e) => warn!(err = %e, "failed to listen for Ctrl+C"),
    }
}

/// Public entry: connect, migrate, build the app and serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = AppConfig::load_and_validate()?;

    let db = db::connect_with_config(&DatabaseConfig::from(&cfg.database)).await?;
    migrate(&db).await?;

    let state = ServerState::new(Catalog::with_database(db.clone()));
    let timeout = Duration::from_secs(cfg.server.request_timeout_secs);
    let app: Router = routes::build_router(state, build_cors(), timeout);

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "catalog server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db::close(&db).await;
    info!("server stopped");
    Ok(())
}
