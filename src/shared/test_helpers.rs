#[cfg(test)]
use crate::core::app::build_app;
#[cfg(test)]
use crate::core::config::{AppConfig, Environment, RateLimitConfig, SwaggerConfig};
#[cfg(test)]
use crate::modules::storage::MemoryReviewStore;
#[cfg(test)]
use axum_test::TestServer;
#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use std::time::Duration;

#[cfg(test)]
pub fn test_app_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_allowed_origins: vec!["*".to_string()],
        max_request_body_size: 64 * 1024,
        environment: Environment::Production,
    }
}

/// Rate limiting off so tests can issue any number of requests
#[cfg(test)]
pub fn test_rate_limit_config() -> RateLimitConfig {
    RateLimitConfig {
        max_requests: 0,
        window: Duration::from_secs(900),
    }
}

#[cfg(test)]
pub fn test_swagger_config() -> SwaggerConfig {
    SwaggerConfig {
        username: None,
        password: None,
        title: "RYC API".to_string(),
        version: "test".to_string(),
        description: "test".to_string(),
    }
}

/// Full application router over an in-memory store
#[cfg(test)]
pub fn test_server(store: Arc<MemoryReviewStore>) -> TestServer {
    test_server_with_config(store, test_app_config())
}

#[cfg(test)]
pub fn test_server_with_config(store: Arc<MemoryReviewStore>, app: AppConfig) -> TestServer {
    let app = build_app(store, &app, &test_rate_limit_config(), &test_swagger_config());
    TestServer::new(app).expect("failed to start test server")
}
