//! Router assembly for the Tabula API.
//!
//! Shared between the server entry point and the integration tests
//! so both exercise the same middleware and layer stack.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::core::services::Services;
use crate::http::{handlers, middleware as http_middleware};

/// Build the application router.
///
/// Cross-origin requests are permitted from any origin. The body
/// limit guards the upload endpoint against oversized files.
pub fn build_router(services: Arc<Services>) -> Router {
    let max_upload_bytes = services.config.limits.max_upload_bytes;

    Router::new()
        // Health check endpoint
        .route("/health", get(handlers::health_handler))
        // API endpoints
        .route("/api/files", post(handlers::upload_handler))
        .route("/api/users", get(handlers::search_handler))
        // Add middleware
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        // Add shared state
        .with_state(services)
}
