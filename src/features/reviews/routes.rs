use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::reviews::handlers;
use crate::features::reviews::services::ReviewService;

/// Create routes for the reviews feature
///
/// Note: This feature is public (no authentication required); submitters
/// are identified only by the anonymous id stored with each review.
pub fn routes(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route("/api/reviews", post(handlers::create_review))
        .route("/api/reviews/{id}/flag", post(handlers::flag_review))
        .with_state(service)
}
