use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to read schema file: {0}")]
    SchemaRead(String),

    #[error("Failed to parse schema file: {0}")]
    SchemaParse(String),

    #[error("Invalid schema document: {0}")]
    SchemaInvalid(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Convert AppError to HTTP response
///
/// Every variant is a startup-time failure; none carries a client-facing
/// status of its own, so anything that reaches a handler maps to a 500
/// with the detail kept out of the response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Internal error: {}", self);

        let body = json!({
            "error": "INTERNAL_ERROR",
            "message": "An internal error occurred",
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Result type alias for AppResult
pub type AppResult<T> = Result<T, AppError>;
