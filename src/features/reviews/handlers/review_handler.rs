use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::reviews::dtos::{
    CreateReviewDto, CreateReviewResponseDto, FlagReviewDto, FlagReviewResponseDto,
};
use crate::features::reviews::services::ReviewService;
use crate::shared::types::ApiResponse;

/// Submit an anonymous review
///
/// The review is stored as `PENDING` and only becomes public once approved
/// by a moderator.
#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review submitted", body = ApiResponse<CreateReviewResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Course not found")
    ),
    tag = "reviews"
)]
pub async fn create_review(
    State(service): State<Arc<ReviewService>>,
    AppJson(dto): AppJson<CreateReviewDto>,
) -> Result<(StatusCode, Json<ApiResponse<CreateReviewResponseDto>>)> {
    let review = service.submit(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(CreateReviewResponseDto {
                id: review.id,
                status: review.status,
            }),
            Some("Review submitted successfully. It will be visible after moderation.".to_string()),
            None,
        )),
    ))
}

/// Flag a review as inappropriate
#[utoipa::path(
    post,
    path = "/api/reviews/{id}/flag",
    params(
        ("id" = Uuid, Path, description = "Review ID")
    ),
    request_body = FlagReviewDto,
    responses(
        (status = 200, description = "Review flagged", body = ApiResponse<FlagReviewResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Review not found")
    ),
    tag = "reviews"
)]
pub async fn flag_review(
    State(service): State<Arc<ReviewService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<FlagReviewDto>,
) -> Result<Json<ApiResponse<FlagReviewResponseDto>>> {
    let outcome = service.flag(id, dto).await?;

    Ok(Json(ApiResponse::success(
        Some(FlagReviewResponseDto {
            status: outcome.status,
        }),
        Some("Review flagged successfully".to_string()),
        None,
    )))
}
