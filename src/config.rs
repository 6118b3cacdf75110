use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub schema: SchemaConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// List of allowed origins for CORS (use ["*"] for all origins)
    pub allowed_origins: Vec<String>,
}

/// OpenAPI schema configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaConfig {
    /// Path to the OpenAPI YAML document; `None` disables the
    /// introspection endpoint
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid SERVER_PORT".to_string()))?;

        // CORS config; the Vite dev server is the only allowed origin by default
        let allowed_origins_str = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string());
        let allowed_origins: Vec<String> = if allowed_origins_str == "*" {
            vec!["*".to_string()]
        } else {
            allowed_origins_str
                .split(',')
                .map(|s| s.trim().to_string())
                .collect()
        };

        // Schema config
        let schema_path = env::var("SCHEMA_PATH").ok().map(PathBuf::from);

        let config = Config {
            server: ServerConfig {
                host: server_host,
                port: server_port,
            },
            cors: CorsConfig { allowed_origins },
            schema: SchemaConfig { path: schema_path },
        };

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        // Validate CORS settings
        if self.cors.allowed_origins.is_empty() {
            return Err(AppError::Configuration(
                "ALLOWED_ORIGINS cannot be empty".to_string(),
            ));
        }

        for origin in &self.cors.allowed_origins {
            if origin == "*" {
                continue;
            }

            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(AppError::Configuration(format!(
                    "ALLOWED_ORIGINS entry '{}' must start with http:// or https://",
                    origin
                )));
            }

            if origin.parse::<http::HeaderValue>().is_err() {
                return Err(AppError::Configuration(format!(
                    "ALLOWED_ORIGINS entry '{}' is not a valid header value",
                    origin
                )));
            }
        }

        // Validate schema settings
        if let Some(path) = &self.schema.path {
            if path.as_os_str().is_empty() {
                return Err(AppError::Configuration(
                    "SCHEMA_PATH cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
