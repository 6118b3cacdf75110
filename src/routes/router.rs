use axum::middleware;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};

use super::handlers;
use super::health;
use super::AppState;

/// Create application router
pub fn create_router(state: Arc<AppState>, allowed_origins: Vec<String>) -> axum::Router {
    use crate::middleware::request_id_middleware;

    // Configure CORS with specific origins. Credentials cannot be combined
    // with wildcard methods/headers, so the named-origin branch mirrors the
    // request instead.
    let cors = if allowed_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<http::HeaderValue> = allowed_origins
            .iter()
            .filter_map(|s| s.parse::<http::HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    };

    let mut router = axum::Router::new()
        .route("/api", get(handlers::api_message))
        .route("/health", get(health::health_check));

    // The introspection endpoint only exists when a schema was loaded;
    // without one the path falls through to the framework 404
    if state.schema.is_some() {
        router = router.route("/api-docs/openapi.json", get(handlers::openapi_schema));
    }

    router
        .layer(cors)
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
