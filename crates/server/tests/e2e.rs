use std::net::SocketAddr;
use std::time::Duration;

use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::Catalog;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::{routes, state::ServerState};

struct TestApp {
    base_url: String,
}

/// Boot the real router against `DATABASE_URL`; `None` when no database is configured.
async fn start_server() -> anyhow::Result<Option<TestApp>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    if models::db::DATABASE_URL.is_none() {
        eprintln!("DATABASE_URL missing; skip e2e tests");
        return Ok(None);
    }

    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;

    let state = ServerState::new(Catalog::with_database(db));
    let app = routes::build_router(state, CorsLayer::very_permissive(), Duration::from_secs(10));
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(Some(TestApp { base_url: format!("http://{}", addr) }))
}

fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let Some(app) = start_server().await? else { return Ok(()) };
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["database"], "connected");
    Ok(())
}

#[tokio::test]
async fn e2e_catalog_flow() -> anyhow::Result<()> {
    let Some(app) = start_server().await? else { return Ok(()) };
    let client = reqwest::Client::new();
    let base = &app.base_url;
    let cat_name = unique("Plumbing");

    let res = client
        .post(format!("{base}/categories"))
        .json(&json!({"name": cat_name, "description": "Pipes", "is_active": true}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let cat: Value = res.json().await?;
    let cat_id = cat["id"].as_i64().unwrap();

    let dup = client.post(format!("{base}/categories")).json(&json!({"name": cat_name})).send().await?;
    assert_eq!(dup.status(), HttpStatusCode::BAD_REQUEST);

    let res = client
        .post(format!("{base}/services"))
        .json(&json!({"category_id": cat_id, "name": "Drain Cleaning", "is_active": true}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let svc: Value = res.json().await?;
    let svc_id = svc["id"].as_i64().unwrap();

    let listed: Value = client.get(format!("{base}/categories/{cat_id}/services")).send().await?.json().await?;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["name"], "Drain Cleaning");

    let detail: Value = client.get(format!("{base}/services/{svc_id}")).send().await?.json().await?;
    assert_eq!(detail["category_name"], cat_name.as_str());

    // referenced categories cannot be deleted
    let res = client.delete(format!("{base}/categories/{cat_id}")).send().await?;
    assert!(!res.status().is_success());

    let res = client.delete(format!("{base}/services/{svc_id}")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = client.get(format!("{base}/services/{svc_id}")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = client.delete(format!("{base}/categories/{cat_id}")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_category_is_rejected() -> anyhow::Result<()> {
    let Some(app) = start_server().await? else { return Ok(()) };
    let res = reqwest::Client::new()
        .post(format!("{}/services", app.base_url))
        .json(&json!({"category_id": i64::MAX, "name": "Orphan"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}
