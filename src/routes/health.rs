use crate::routes::types::HealthCheckResponse;
use axum::response::IntoResponse;
use axum::Json;

/// Service name reported by the health endpoint
const SERVICE_NAME: &str = "Camphand API";

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
