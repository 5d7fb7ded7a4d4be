use utoipa::{Modify, OpenApi};

use crate::features::courses::{dtos as courses_dtos, handlers as courses_handlers};
use crate::features::reviews::{
    dtos as reviews_dtos, handlers as reviews_handlers, models as reviews_models,
};
use crate::features::system::{dtos as system_dtos, handlers as system_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // System
        system_handlers::api_info,
        system_handlers::health_check,
        // Courses (public)
        courses_handlers::list_courses,
        courses_handlers::get_course,
        // Reviews (public)
        reviews_handlers::create_review,
        reviews_handlers::flag_review,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // System
            system_dtos::HealthStatus,
            system_dtos::DatabaseStatus,
            system_dtos::HealthResponseDto,
            system_dtos::ApiEndpointsDto,
            system_dtos::ApiInfoDto,
            ApiResponse<system_dtos::HealthResponseDto>,
            ApiResponse<system_dtos::ApiInfoDto>,
            // Courses
            courses_dtos::CourseSummaryDto,
            courses_dtos::CourseReviewDto,
            courses_dtos::CourseDetailDto,
            ApiResponse<Vec<courses_dtos::CourseSummaryDto>>,
            ApiResponse<courses_dtos::CourseDetailDto>,
            // Reviews
            reviews_models::ReviewStatus,
            reviews_models::Semester,
            reviews_dtos::CreateReviewDto,
            reviews_dtos::CreateReviewResponseDto,
            reviews_dtos::FlagReviewDto,
            reviews_dtos::FlagReviewResponseDto,
            ApiResponse<reviews_dtos::CreateReviewResponseDto>,
            ApiResponse<reviews_dtos::FlagReviewResponseDto>,
        )
    ),
    tags(
        (name = "system", description = "API information and health check"),
        (name = "courses", description = "Course catalogue with aggregated ratings (public)"),
        (name = "reviews", description = "Anonymous review submission and flagging (public)"),
    ),
    info(
        title = "RYC API",
        version = "1.0.0",
        description = "Rate Your Courses: anonymous course reviews",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
