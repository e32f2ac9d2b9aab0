//! Server configuration loaded from environment variables.

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// HTTP server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Allowed CORS origins (from OUTLINER_CORS_ORIGINS, comma-separated).
    /// `None` means any origin is accepted, for local development.
    pub cors_origins: Option<Vec<String>>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let cors_origins = std::env::var("OUTLINER_CORS_ORIGINS")
            .ok()
            .map(|s| s.split(',').map(|s| s.trim().to_string()).collect());

        Self { cors_origins }
    }

    /// Config that accepts any origin (local development/testing).
    pub fn permissive() -> Self {
        Self { cors_origins: None }
    }

    /// Config restricted to specific origins.
    pub fn with_cors_origins(origins: Vec<String>) -> Self {
        Self {
            cors_origins: Some(origins),
        }
    }

    pub(crate) fn cors_layer(&self) -> CorsLayer {
        match &self.cors_origins {
            Some(origins) => {
                let origins: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|origin| origin.parse().ok())
                    .collect();
                CorsLayer::new()
                    .allow_origin(origins)
                    .allow_methods(Any)
                    .allow_headers(Any)
            }
            None => CorsLayer::permissive(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
