//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::{DomainError, ValidationErrors};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// One or more field-level validation failures.
    Validation(ValidationErrors),
    /// Bad request from the client.
    BadRequest(String),
    /// Resource not found; the response carries no body beyond the status.
    NotFound,
    /// Internal server error; the cause is logged, never exposed.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                let body = serde_json::json!({ "errors": errors });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
            ApiError::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let body = serde_json::json!({ "error": message });
    (status, axum::Json(body)).into_response()
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => ApiError::Validation(errors),
            DomainError::NotFound(id) => {
                tracing::debug!(order_id = %id, "order not found");
                ApiError::NotFound
            }
            DomainError::Store(err) => ApiError::Internal(err.to_string()),
        }
    }
}
