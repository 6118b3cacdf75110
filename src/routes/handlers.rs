use crate::error::{AppError, AppResult};
use crate::routes::types::MessageResponse;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use std::sync::Arc;

use super::AppState;

/// Fixed greeting consumed by the Camphand frontend
pub async fn api_message() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello API".to_string(),
    })
}

/// Serve the OpenAPI document loaded at startup.
///
/// The route is only registered when a document was loaded, so the `None`
/// arm is unreachable in a running server.
pub async fn openapi_schema(State(state): State<Arc<AppState>>) -> AppResult<Json<Value>> {
    let document = state
        .schema
        .as_ref()
        .ok_or_else(|| AppError::Internal("OpenAPI document not loaded".to_string()))?;

    Ok(Json(document.clone()))
}
