use crate::core::config::RateLimitConfig;
use crate::core::error::{AppError, InternalErrorDetail};
use crate::shared::types::ApiResponse;
use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::prelude::*;
use dashmap::DashMap;
use std::any::Any;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::cors::{self, AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        layer.allow_origin(cors::Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

/// Renders a handler panic as a plain 500 envelope
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    AppError::Internal(format!("Handler panicked: {}", detail)).into_response()
}

/// Re-renders 5xx envelopes with their underlying cause in `errors`.
/// Installed only when running in development.
pub async fn expose_internal_errors(req: Request, next: Next) -> Response {
    let response = next.run(req).await;

    let Some(detail) = response.extensions().get::<InternalErrorDetail>().cloned() else {
        return response;
    };

    let body = Json(ApiResponse::<()>::error(
        Some(detail.message),
        Some(vec![detail.detail]),
    ));

    let (parts, _) = response.into_parts();
    let mut rendered = (parts.status, body).into_response();
    for (name, value) in parts.headers.iter() {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            rendered.headers_mut().append(name.clone(), value.clone());
        }
    }
    rendered
}

pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let credentials = valid_credentials.clone();
        Box::pin(async move {
            let authorized = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|header| header.to_str().ok())
                .and_then(|header| header.strip_prefix("Basic "))
                .and_then(|encoded| BASE64_STANDARD.decode(encoded).ok())
                .and_then(|decoded| String::from_utf8(decoded).ok())
                .is_some_and(|creds| creds == *credentials);

            if authorized {
                return Ok(next.run(req).await);
            }

            let response = (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"Swagger UI\"")],
                Body::from("Unauthorized"),
            )
                .into_response();

            Err(response)
        })
    }
}

// ============================================================================
// Rate limiting
// ============================================================================

/// Entries are pruned once the map grows past this many clients
const RATE_LIMIT_PRUNE_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct ClientWindow {
    started: Instant,
    count: u32,
}

/// Fixed-window request counter keyed by client IP
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    clients: DashMap<IpAddr, ClientWindow>,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            max_requests: config.max_requests,
            window: config.window,
            clients: DashMap::new(),
        }
    }

    /// Record one request from `client`; returns false when over the limit.
    pub fn check(&self, client: IpAddr) -> bool {
        self.check_at(client, Instant::now())
    }

    fn check_at(&self, client: IpAddr, now: Instant) -> bool {
        if self.max_requests == 0 {
            return true;
        }

        if self.clients.len() > RATE_LIMIT_PRUNE_THRESHOLD {
            let window = self.window;
            self.clients
                .retain(|_, w| now.duration_since(w.started) < window);
        }

        let mut entry = self.clients.entry(client).or_insert(ClientWindow {
            started: now,
            count: 0,
        });

        if now.duration_since(entry.started) >= self.window {
            entry.started = now;
            entry.count = 0;
        }

        if entry.count >= self.max_requests {
            return false;
        }

        entry.count += 1;
        true
    }
}

pub async fn rate_limit_middleware(
    State(limiter): State<Arc<RateLimiter>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Falls back to a shared bucket when the server was not started with connect info
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    if !limiter.check(client) {
        tracing::warn!("Rate limit exceeded for client {}", client);
        return Err(AppError::RateLimitExceeded(
            "Too many requests from this IP, please try again later.".to_string(),
        ));
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max_requests: u32, window_secs: u64) -> RateLimiter {
        RateLimiter::new(&RateLimitConfig {
            max_requests,
            window: Duration::from_secs(window_secs),
        })
    }

    #[test]
    fn test_rate_limiter_blocks_after_max_requests() {
        let limiter = limiter(2, 60);
        let client: IpAddr = "10.0.0.1".parse().unwrap();
        let now = Instant::now();

        assert!(limiter.check_at(client, now));
        assert!(limiter.check_at(client, now));
        assert!(!limiter.check_at(client, now));
    }

    #[test]
    fn test_rate_limiter_tracks_clients_separately() {
        let limiter = limiter(1, 60);
        let now = Instant::now();

        assert!(limiter.check_at("10.0.0.1".parse().unwrap(), now));
        assert!(limiter.check_at("10.0.0.2".parse().unwrap(), now));
        assert!(!limiter.check_at("10.0.0.1".parse().unwrap(), now));
    }

    #[test]
    fn test_rate_limiter_resets_after_window() {
        let limiter = limiter(1, 60);
        let client: IpAddr = "10.0.0.1".parse().unwrap();
        let now = Instant::now();

        assert!(limiter.check_at(client, now));
        assert!(!limiter.check_at(client, now + Duration::from_secs(30)));
        assert!(limiter.check_at(client, now + Duration::from_secs(61)));
    }

    #[test]
    fn test_rate_limiter_disabled_with_zero_max() {
        let limiter = limiter(0, 60);
        let client: IpAddr = "10.0.0.1".parse().unwrap();
        let now = Instant::now();

        for _ in 0..1000 {
            assert!(limiter.check_at(client, now));
        }
    }

    #[test]
    fn test_handle_panic_returns_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
