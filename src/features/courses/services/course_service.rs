use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::courses::dtos::{CourseDetailDto, CourseReviewDto, CourseSummaryDto};
use crate::features::courses::models::CourseFilter;
use crate::features::courses::services::CourseStats;
use crate::features::reviews::models::Review;
use crate::modules::storage::ReviewStore;

/// Service for the public course catalogue
pub struct CourseService {
    store: Arc<dyn ReviewStore>,
}

impl CourseService {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    /// List courses matching `filter`, ordered by code, with approved-review stats
    pub async fn list(&self, filter: &CourseFilter) -> Result<Vec<CourseSummaryDto>> {
        let courses = self.store.list_courses(filter).await?;
        let course_ids: Vec<Uuid> = courses.iter().map(|c| c.id).collect();
        let reviews = self.store.list_approved_reviews(&course_ids).await?;

        let mut by_course: HashMap<Uuid, Vec<&Review>> = HashMap::new();
        for review in &reviews {
            by_course.entry(review.course_id).or_default().push(review);
        }

        Ok(courses
            .into_iter()
            .map(|course| {
                let stats = by_course
                    .get(&course.id)
                    .map(|reviews| CourseStats::from_reviews(reviews.iter().copied()))
                    .unwrap_or_default();
                CourseSummaryDto::new(course, stats)
            })
            .collect())
    }

    /// Get a course with its approved reviews, newest first
    pub async fn get_detail(&self, id: Uuid) -> Result<CourseDetailDto> {
        let course = self
            .store
            .find_course(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        let reviews: Vec<Review> = self
            .store
            .list_approved_reviews(&[id])
            .await?
            .into_iter()
            .filter(|r| r.status.is_public())
            .collect();
        let stats = CourseStats::from_reviews(&reviews);

        Ok(CourseDetailDto {
            course: CourseSummaryDto::new(course, stats),
            reviews: reviews.into_iter().map(CourseReviewDto::from).collect(),
        })
    }
}
