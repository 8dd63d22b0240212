use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use service::category::Category;
use tracing::info;

use crate::errors::{parse_id, JsonApiError};
use crate::state::ServerState;

#[utoipa::path(
    post, path = "/categories", tag = "categories",
    request_body = crate::openapi::CategoryDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CategoryDoc),
        (status = 400, description = "Validation Error or duplicate name", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Category>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.catalog.categories.create_category(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/categories", tag = "categories",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::CategoryDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Category>>, JsonApiError> {
    let list = state.catalog.categories.list_categories().await?;
    info!(count = list.len(), "list categories");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/categories/{id}", tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CategoryDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Category>, JsonApiError> {
    let id = parse_id(&id)?;
    match state.catalog.categories.get_category(id).await? {
        Some(c) => Ok(Json(c)),
        None => Err(JsonApiError::not_found("category")),
    }
}

#[utoipa::path(
    put, path = "/categories/{id}", tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
    request_body = crate::openapi::CategoryDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error or Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<Category>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let id = parse_id(&id)?;
    let Json(mut input) = payload?;
    input.id = id;
    state.catalog.categories.update_category(input).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/categories/{id}", tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Validation Error or Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    let id = parse_id(&id)?;
    state.catalog.categories.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
