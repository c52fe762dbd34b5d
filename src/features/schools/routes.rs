use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::schools::handlers;
use crate::features::schools::services::SchoolService;

/// Create routes for the schools feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<SchoolService>) -> Router {
    Router::new()
        .route("/api/addSchool", post(handlers::add_school))
        .route("/api/listSchools", get(handlers::list_schools))
        .route("/api/schools/{id}", get(handlers::get_school))
        .with_state(service)
}
