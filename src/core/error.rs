use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;

/// Underlying cause of a 5xx response, carried as a response extension.
/// The body never includes it; see `middleware::expose_internal_errors`.
#[derive(Debug, Clone)]
pub struct InternalErrorDetail {
    pub message: String,
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors, detail) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                    None,
                    Some(e.to_string()),
                )
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone(), None, None),
            AppError::Validation(ref msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone(),
                Some(vec![msg.clone()]),
                None,
            ),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None, None),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                    Some(msg.clone()),
                )
            }
            AppError::RateLimitExceeded(ref msg) => {
                (StatusCode::TOO_MANY_REQUESTS, msg.clone(), None, None)
            }
        };

        let body = Json(ApiResponse::<()>::error(Some(message.clone()), errors));
        let mut response = (status, body).into_response();

        if let Some(detail) = detail {
            response
                .extensions_mut()
                .insert(InternalErrorDetail { message, detail });
        }

        response
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("rating must be between 1 and 5".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Course not found".to_string())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Database(sqlx::Error::PoolTimedOut)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::RateLimitExceeded("slow down".to_string())
                .into_response()
                .status(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn test_internal_detail_is_attached_only_to_server_errors() {
        let response = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        let detail = response.extensions().get::<InternalErrorDetail>().unwrap();
        assert_eq!(detail.message, "Database error occurred");
        assert!(detail.detail.contains("pool timed out"));

        let response = AppError::NotFound("Course not found".to_string()).into_response();
        assert!(response.extensions().get::<InternalErrorDetail>().is_none());
    }
}
