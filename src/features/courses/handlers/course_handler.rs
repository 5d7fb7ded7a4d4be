use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppPath;
use crate::features::courses::dtos::{CourseDetailDto, CourseSummaryDto, ListCoursesQuery};
use crate::features::courses::models::CourseFilter;
use crate::features::courses::services::CourseService;
use crate::shared::types::{ApiResponse, Meta};

/// List courses with aggregated ratings
///
/// Only approved reviews count towards `reviewCount` and the averages.
#[utoipa::path(
    get,
    path = "/api/courses",
    params(ListCoursesQuery),
    responses(
        (status = 200, description = "List of courses", body = ApiResponse<Vec<CourseSummaryDto>>),
    ),
    tag = "courses"
)]
pub async fn list_courses(
    State(service): State<Arc<CourseService>>,
    Query(query): Query<ListCoursesQuery>,
) -> Result<Json<ApiResponse<Vec<CourseSummaryDto>>>> {
    let filter = CourseFilter::new(query.department, query.search);
    let courses = service.list(&filter).await?;
    let total = courses.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(courses),
        None,
        Some(Meta { total }),
    )))
}

/// Get course detail with approved reviews
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course found", body = ApiResponse<CourseDetailDto>),
        (status = 404, description = "Course not found")
    ),
    tag = "courses"
)]
pub async fn get_course(
    State(service): State<Arc<CourseService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<CourseDetailDto>>> {
    let course = service.get_detail(id).await?;
    Ok(Json(ApiResponse::success(Some(course), None, None)))
}
