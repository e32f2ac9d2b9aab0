mod config;
mod handlers;

pub use config::ServerConfig;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::store::Store;

/// Build the API router with configuration from the environment.
pub fn create_router(store: Store) -> Router {
    create_router_with_config(store, ServerConfig::from_env())
}

pub fn create_router_with_config(store: Store, config: ServerConfig) -> Router {
    let api = Router::new()
        // Outline
        .route("/outline", get(handlers::get_outline))
        .route("/outline/actions", post(handlers::dispatch_action))
        .route("/outline/tree", get(handlers::get_outline_tree))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(config.cors_layer())
        .with_state(store)
}
