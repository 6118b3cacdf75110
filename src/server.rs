//! Server startup and shutdown logic.

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::routes;
use crate::schema;
use crate::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Run the web server with the given configuration.
///
/// Loads the OpenAPI document (if configured), builds the router, binds the
/// listener, and serves until a shutdown signal arrives.
///
/// # Errors
///
/// This function will return an error if:
/// - The configured schema file is missing or malformed (checked before the
///   port is opened, so a broken schema never leaves a half-started server)
/// - Server binding fails
/// - Server runtime error occurs
pub async fn run_server(config: Config, addr: String) -> AppResult<()> {
    info!("Starting Camphand API server...");

    let schema = match &config.schema.path {
        Some(path) => {
            info!("Loading OpenAPI document from {}", path.display());
            Some(schema::load_schema(path)?)
        }
        None => None,
    };

    let state = Arc::new(AppState { schema });

    // Create router
    let app = routes::create_router(state, config.cors.allowed_origins.clone());

    // Start server
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to address {}: {}", addr, e)))?;

    info!("Server listening on {}", addr);
    info!(
        "Allowed origins: {}",
        config.cors.allowed_origins.join(", ")
    );

    // Set up graceful shutdown
    let shutdown_signal = create_shutdown_signal();

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create a future that resolves when a shutdown signal is received.
///
/// On Unix-like systems, this listens for both Ctrl+C (SIGINT) and SIGTERM.
/// On other platforms, it only listens for Ctrl+C.
///
/// # Panics
///
/// Panics if signal handler installation fails, since without working
/// signal handlers graceful shutdown is impossible.
async fn create_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;
}
