use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use service::services::{Service, ServiceDetail};
use tracing::info;

use crate::errors::{parse_id, JsonApiError};
use crate::state::ServerState;

#[utoipa::path(
    post, path = "/services", tag = "services",
    request_body = crate::openapi::ServiceDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ServiceDoc),
        (status = 400, description = "Validation Error or unknown category", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Service>, JsonRejection>,
) -> Result<(StatusCode, Json<Service>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.catalog.services.create_service(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/services", tag = "services",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ServiceDetailDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ServiceDetail>>, JsonApiError> {
    let list = state.catalog.services.list_services().await?;
    info!(count = list.len(), "list services");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/categories/{id}/services", tag = "services",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ServiceDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Service>>, JsonApiError> {
    let category_id = parse_id(&id)?;
    let list = state.catalog.services.list_services_by_category(category_id).await?;
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/services/{id}", tag = "services",
    params(("id" = i64, Path, description = "Service ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ServiceDetailDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<ServiceDetail>, JsonApiError> {
    let id = parse_id(&id)?;
    match state.catalog.services.get_service(id).await? {
        Some(s) => Ok(Json(s)),
        None => Err(JsonApiError::not_found("service")),
    }
}

#[utoipa::path(
    put, path = "/services/{id}", tag = "services",
    params(("id" = i64, Path, description = "Service ID")),
    request_body = crate::openapi::ServiceDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error or Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<Service>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let id = parse_id(&id)?;
    let Json(mut input) = payload?;
    input.id = id;
    state.catalog.services.update_service(input).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/services/{id}", tag = "services",
    params(("id" = i64, Path, description = "Service ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Validation Error or Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    let id = parse_id(&id)?;
    state.catalog.services.delete_service(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
