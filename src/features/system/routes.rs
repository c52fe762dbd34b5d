use axum::{routing::get, Router};

use crate::features::system::handlers;

/// Create routes for health and discovery, plus the 404 fallback
pub fn routes() -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
}
