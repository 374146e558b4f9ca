//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::ValidationError;
use crate::store::StoreError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Body or query could not be decoded at all (400)
    BadRequest { message: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Store error (500, logged)
    Store(StoreError),
}

impl ApiError {
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: "user",
            id: id.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "bad_request",
                    "message": message
                }),
            ),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} '{}' not found", resource, id)
                }),
            ),
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!(error = %e, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Store(e),
        }
    }
}
