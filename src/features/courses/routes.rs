use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::courses::handlers;
use crate::features::courses::services::CourseService;

/// Create routes for the courses feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<CourseService>) -> Router {
    Router::new()
        .route("/api/courses", get(handlers::list_courses))
        .route("/api/courses/{id}", get(handlers::get_course))
        .with_state(service)
}
