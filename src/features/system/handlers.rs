use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use crate::core::error::AppError;
use crate::features::system::dtos::{
    ApiEndpointsDto, ApiInfoDto, DatabaseStatus, HealthResponseDto, HealthStatus,
};
use crate::modules::storage::ReviewStore;
use crate::shared::constants::{API_VERSION, SERVICE_NAME};
use crate::shared::types::ApiResponse;

/// State for the system endpoints
#[derive(Clone)]
pub struct SystemState {
    pub store: Arc<dyn ReviewStore>,
    pub expose_errors: bool,
}

/// Service and storage health
///
/// Never mutates state. Returns 503 when storage is unreachable.
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service healthy", body = ApiResponse<HealthResponseDto>),
        (status = 503, description = "Storage unreachable", body = ApiResponse<HealthResponseDto>)
    ),
    tag = "system"
)]
pub async fn health_check(
    State(state): State<SystemState>,
) -> (StatusCode, Json<ApiResponse<HealthResponseDto>>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(HealthResponseDto {
                    status: HealthStatus::Healthy,
                    timestamp: Utc::now(),
                    service: SERVICE_NAME.to_string(),
                    database: DatabaseStatus::Connected,
                    error: None,
                }),
                None,
                None,
            )),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            let body = ApiResponse {
                success: false,
                data: Some(HealthResponseDto {
                    status: HealthStatus::Unhealthy,
                    timestamp: Utc::now(),
                    service: SERVICE_NAME.to_string(),
                    database: DatabaseStatus::Disconnected,
                    error: state.expose_errors.then(|| e.to_string()),
                }),
                message: Some("Database unreachable".to_string()),
                meta: None,
                errors: None,
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(body))
        }
    }
}

/// API name, version and entry points
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API information", body = ApiResponse<ApiInfoDto>)
    ),
    tag = "system"
)]
pub async fn api_info() -> Json<ApiResponse<ApiInfoDto>> {
    Json(ApiResponse::success(
        Some(ApiInfoDto {
            message: "RYC - Rate Your Courses API".to_string(),
            version: API_VERSION.to_string(),
            endpoints: ApiEndpointsDto {
                health: "/healthz".to_string(),
                courses: "/api/courses".to_string(),
                reviews: "/api/reviews".to_string(),
                docs: "/swagger-ui".to_string(),
            },
        }),
        None,
        None,
    ))
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

#[cfg(test)]
mod tests {
    use crate::core::config::Environment;
    use crate::modules::storage::MemoryReviewStore;
    use crate::shared::test_helpers::{test_app_config, test_server, test_server_with_config};
    use axum::http::StatusCode;
    use serde_json::Value;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health_connected() {
        let server = test_server(Arc::new(MemoryReviewStore::new()));

        let response = server.get("/healthz").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["status"], "healthy");
        assert_eq!(body["data"]["service"], "ryc-backend");
        assert_eq!(body["data"]["database"], "connected");
        assert!(body["data"]["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_health_disconnected() {
        let store = Arc::new(MemoryReviewStore::new());
        store.set_offline(true);
        let server = test_server(store);

        let response = server.get("/healthz").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["data"]["status"], "unhealthy");
        assert_eq!(body["data"]["database"], "disconnected");
        assert!(body["data"].get("error").is_none());
    }

    #[tokio::test]
    async fn test_health_reports_error_in_development() {
        let store = Arc::new(MemoryReviewStore::new());
        store.set_offline(true);
        let config = crate::core::config::AppConfig {
            environment: Environment::Development,
            ..test_app_config()
        };
        let server = test_server_with_config(store, config);

        let response = server.get("/healthz").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = response.json();
        assert!(body["data"]["error"].is_string());
    }

    #[tokio::test]
    async fn test_api_info() {
        let server = test_server(Arc::new(MemoryReviewStore::new()));

        let response = server.get("/").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["message"], "RYC - Rate Your Courses API");
        assert_eq!(body["data"]["endpoints"]["health"], "/healthz");
        assert_eq!(body["data"]["endpoints"]["courses"], "/api/courses");
    }
}
