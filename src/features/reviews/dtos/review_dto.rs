use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::reviews::models::{ReviewStatus, Semester};

/// Request DTO for submitting a review.
///
/// Required fields are optional here so that a missing value is reported as
/// a validation error rather than a JSON parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    /// Course being reviewed
    #[validate(required(message = "courseId is required"))]
    pub course_id: Option<Uuid>,

    /// Overall rating (1-5)
    #[validate(
        required(message = "rating is required"),
        range(min = 1, max = 5, message = "rating must be between 1 and 5")
    )]
    pub rating: Option<i32>,

    /// Difficulty (1-5)
    #[validate(
        required(message = "difficulty is required"),
        range(min = 1, max = 5, message = "difficulty must be between 1 and 5")
    )]
    pub difficulty: Option<i32>,

    /// Workload (1-5)
    #[validate(
        required(message = "workload is required"),
        range(min = 1, max = 5, message = "workload must be between 1 and 5")
    )]
    pub workload: Option<i32>,

    /// Free-text comment
    #[validate(length(max = 5000, message = "comment must not exceed 5000 characters"))]
    pub comment: Option<String>,

    pub semester: Option<Semester>,

    #[validate(range(min = 1900, max = 2100, message = "year must be between 1900 and 2100"))]
    pub year: Option<i32>,
}

/// Response DTO for a submitted review
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewResponseDto {
    pub id: Uuid,
    pub status: ReviewStatus,
}

/// Request DTO for flagging a review
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlagReviewDto {
    /// Why the review is inappropriate
    #[validate(
        required(message = "reason is required"),
        length(max = 1000, message = "reason must not exceed 1000 characters")
    )]
    pub reason: Option<String>,
}

/// Response DTO for a flag action
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlagReviewResponseDto {
    pub status: ReviewStatus,
}
