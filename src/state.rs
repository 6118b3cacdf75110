use serde_json::Value;

/// Application state shared across all HTTP handlers.
///
/// This struct is wrapped in `Arc` and shared across all request handlers
/// via Axum's State extraction.
#[derive(Clone)]
pub struct AppState {
    /// The OpenAPI document published at the introspection endpoint, if one
    /// was loaded at startup. Never mutated after startup.
    pub schema: Option<Value>,
}
