use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::reviews::dtos::{CreateReviewDto, FlagReviewDto};
use crate::features::reviews::models::{CreateReview, FlagOutcome, Review};
use crate::features::reviews::services::generate_anonymous_id;
use crate::modules::storage::ReviewStore;
use crate::shared::validation::validation_message;

/// Service for review submission and reader flagging
pub struct ReviewService {
    store: Arc<dyn ReviewStore>,
}

impl ReviewService {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    /// Submit a new anonymous review; it starts `Pending` with no flags
    pub async fn submit(&self, dto: CreateReviewDto) -> Result<Review> {
        dto.validate()
            .map_err(|e| AppError::Validation(validation_message(&e)))?;

        let (Some(course_id), Some(rating), Some(difficulty), Some(workload)) =
            (dto.course_id, dto.rating, dto.difficulty, dto.workload)
        else {
            return Err(AppError::Validation(
                "courseId, rating, difficulty and workload are required".to_string(),
            ));
        };

        if self.store.find_course(course_id).await?.is_none() {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        let review = self
            .store
            .insert_review(CreateReview {
                course_id,
                rating,
                difficulty,
                workload,
                comment: dto.comment.filter(|c| !c.trim().is_empty()),
                semester: dto.semester,
                year: dto.year,
                anonymous_id: generate_anonymous_id(),
            })
            .await?;

        tracing::info!(
            "Review created: id={}, course_id={}, status={}",
            review.id,
            review.course_id,
            review.status
        );

        Ok(review)
    }

    /// Flag a review. The third flag moves it to `Flagged`.
    pub async fn flag(&self, review_id: Uuid, dto: FlagReviewDto) -> Result<FlagOutcome> {
        dto.validate()
            .map_err(|e| AppError::Validation(validation_message(&e)))?;

        let reason = dto
            .reason
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or_else(|| AppError::Validation("reason is required".to_string()))?;

        let outcome = self
            .store
            .flag_review(review_id, reason)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

        tracing::info!(
            "Review flagged: id={}, flag_count={}, status={}",
            review_id,
            outcome.flag_count,
            outcome.status
        );
        if outcome.crossed_threshold() {
            tracing::warn!("Review {} hidden pending moderation", review_id);
        }

        Ok(outcome)
    }
}
