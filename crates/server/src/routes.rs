use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    BoxError, Json, Router,
};
use common::types::Health;
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, Level};
use utoipa::OpenApi;

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod categories;
pub mod services;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = crate::openapi::HealthResponse),
        (status = 500, description = "Database connection failed", body = crate::openapi::HealthResponse)
    )
)]
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<Health>) {
    let report = match state.catalog.health.ping().await {
        Ok(()) => Health::connected(),
        Err(e) => {
            error!(err = %e, "health check failed");
            Health::database_failed()
        }
    };
    let status = if report.is_ok() { StatusCode::OK } else { StatusCode::INTERNAL_SERVER_ERROR };
    (status, Json(report))
}

/// Render middleware failures as `{error}`; an expired deadline is a 408.
async fn handle_middleware_error(err: BoxError) -> JsonApiError {
    if err.is::<Elapsed>() {
        JsonApiError::new(StatusCode::REQUEST_TIMEOUT, "request timed out")
    } else {
        error!(err = %err, "unhandled middleware error");
        JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router with tracing, CORS and a per-request deadline.
pub fn build_router(state: ServerState, cors: CorsLayer, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/categories", post(categories::create).get(categories::list))
        // nested listing is registered ahead of the single-category routes
        .route("/categories/:id/services", get(services::list_by_category))
        .route(
            "/categories/:id",
            get(categories::get).put(categories::update).delete(categories::delete),
        )
        .route("/services", post(services::create).get(services::list))
        .route(
            "/services/:id",
            get(services::get).put(services::update).delete(services::delete),
        )
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses are logged at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
