use axum::{routing::get, Router};

use crate::features::system::handlers::{self, SystemState};

/// Root info and health check (no authentication required)
pub fn routes(state: SystemState) -> Router {
    Router::new()
        .route("/", get(handlers::api_info))
        .route("/healthz", get(handlers::health_check))
        .with_state(state)
}
