//! Route definitions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;

/// Create the API router.
pub fn create_router() -> Router {
    Router::new()
        // Service banner
        .route("/", get(handlers::root))
        // Health
        .route("/health", get(handlers::health))
        .route("/api/v1/health", get(handlers::health))
        // Statement scan
        .route("/api/v1/scan", post(handlers::scan))
}
