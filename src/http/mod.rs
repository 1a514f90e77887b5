//! HTTP REST adapter
//!
//! Depends only on core/. Never imports from cli/.
//!
//! Provides the search endpoints the website calls, via the Axum web
//! framework.

pub mod error;
pub mod handlers;
pub mod middleware;

pub use handlers::*;

use crate::core::services::Services;
use axum::{middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Build the API router over shared services
pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(handlers::health_handler))
        // API v1 endpoints
        .route("/api/v1/search", get(handlers::search_handler))
        .route("/api/v1/index", get(handlers::index_status_handler))
        // Add middleware
        .layer(axum_middleware::from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        // Add shared state
        .with_state(services)
}
