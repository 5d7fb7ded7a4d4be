use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, middleware::from_fn, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, RateLimitConfig, SwaggerConfig};
use crate::core::middleware::{self, RateLimiter};
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::courses::{routes as courses_routes, CourseService};
use crate::features::reviews::{routes as reviews_routes, ReviewService};
use crate::features::system::{handlers as system_handlers, routes as system_routes, SystemState};
use crate::modules::storage::ReviewStore;

/// Build the full application router over the given store
pub fn build_app(
    store: Arc<dyn ReviewStore>,
    app: &AppConfig,
    rate_limit: &RateLimitConfig,
    swagger: &SwaggerConfig,
) -> Router {
    let course_service = Arc::new(CourseService::new(Arc::clone(&store)));
    let review_service = Arc::new(ReviewService::new(Arc::clone(&store)));

    let mut api_routes = Router::new()
        .merge(courses_routes::routes(course_service))
        .merge(reviews_routes::routes(review_service));

    if rate_limit.is_enabled() {
        tracing::info!(
            "Rate limiting enabled: {} requests per {}s",
            rate_limit.max_requests,
            rate_limit.window.as_secs()
        );
        api_routes = api_routes.route_layer(axum::middleware::from_fn_with_state(
            Arc::new(RateLimiter::new(rate_limit)),
            middleware::rate_limit_middleware,
        ));
    }

    let expose_errors = app.environment.is_development();
    let system = system_routes::routes(SystemState {
        store,
        expose_errors,
    });

    let mut router = Router::new()
        .merge(swagger_routes(swagger))
        .merge(system)
        .merge(api_routes)
        .fallback(system_handlers::not_found)
        .layer(DefaultBodyLimit::max(app.max_request_body_size))
        .layer(middleware::cors_layer(app.cors_allowed_origins.clone()))
        .layer(CatchPanicLayer::custom(middleware::handle_panic));

    if expose_errors {
        tracing::info!("Development mode: internal error details exposed in responses");
        router = router.layer(from_fn(middleware::expose_internal_errors));
    }

    router
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

fn swagger_routes(config: &SwaggerConfig) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.title.clone(),
        version: config.version.clone(),
        description: config.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    if let Some(credentials) = config.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        swagger.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
            credentials,
        ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        swagger
    }
}
