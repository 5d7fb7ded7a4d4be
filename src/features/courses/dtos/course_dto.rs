use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::courses::models::Course;
use crate::features::courses::services::CourseStats;
use crate::features::reviews::models::{Review, Semester};

/// Query params for listing courses
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCoursesQuery {
    /// Exact department name
    pub department: Option<String>,
    /// Case-insensitive substring of name, code or description
    pub search: Option<String>,
}

/// Course with aggregated statistics over approved reviews
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummaryDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub review_count: i64,
    pub avg_rating: Option<f64>,
    pub avg_difficulty: Option<f64>,
    pub avg_workload: Option<f64>,
}

impl CourseSummaryDto {
    pub fn new(course: Course, stats: CourseStats) -> Self {
        Self {
            id: course.id,
            code: course.code,
            name: course.name,
            department: course.department,
            description: course.description,
            review_count: stats.review_count,
            avg_rating: stats.avg_rating,
            avg_difficulty: stats.avg_difficulty,
            avg_workload: stats.avg_workload,
        }
    }
}

/// Public view of an approved review. The anonymous id and flag count stay
/// server-side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseReviewDto {
    pub id: Uuid,
    pub rating: i32,
    pub difficulty: i32,
    pub workload: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<Semester>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for CourseReviewDto {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            rating: r.rating,
            difficulty: r.difficulty,
            workload: r.workload,
            comment: r.comment,
            semester: r.semester,
            year: r.year,
            created_at: r.created_at,
        }
    }
}

/// Course detail with its approved reviews, newest first
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetailDto {
    #[serde(flatten)]
    pub course: CourseSummaryDto,
    pub reviews: Vec<CourseReviewDto>,
}
