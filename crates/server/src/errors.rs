use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use tracing::error;

/// Error response rendered as `{"error": "<message>"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(entity: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("{} not found", entity))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

/// Caller mistakes (validation, conflict, missing row on write) map to 400;
/// backend failures map to 500.
impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        if e.is_client_error() {
            return Self::bad_request(e.to_string());
        }
        error!(err = %e, code = e.code(), "storage failure");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        Self::bad_request(r.body_text())
    }
}

/// Parse a `:id` path segment into an entity identity.
pub fn parse_id(raw: &str) -> Result<i64, JsonApiError> {
    raw.parse::<i64>()
        .map_err(|e| JsonApiError::bad_request(format!("invalid id {:?}: {}", raw, e)))
}
