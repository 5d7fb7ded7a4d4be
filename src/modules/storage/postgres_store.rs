//! PostgreSQL implementation of [`ReviewStore`]

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::ReviewStore;
use crate::core::error::{AppError, Result};
use crate::features::courses::models::{Course, CourseFilter};
use crate::features::reviews::models::{
    CreateReview, Flag, FlagOutcome, Review, ReviewStatus,
};
use crate::shared::constants::FLAG_THRESHOLD;

/// Postgres error code for foreign key violations
const FOREIGN_KEY_VIOLATION: &str = "23503";

const REVIEW_COLUMNS: &str = "id, course_id, rating, difficulty, workload, comment, semester, \
                              year, anonymous_id, flag_count, status, created_at, updated_at";

#[derive(Debug, FromRow)]
struct FlaggedReviewRow {
    flag_count: i32,
    status: ReviewStatus,
}

pub struct PostgresReviewStore {
    pool: PgPool,
}

impl PostgresReviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewStore for PostgresReviewStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>> {
        sqlx::query_as::<_, Course>(
            r#"
            SELECT id, code, name, department, description, created_at, updated_at
            FROM courses
            WHERE ($1::text IS NULL OR department = $1)
              AND ($2::text IS NULL
                   OR name ILIKE $2
                   OR code ILIKE $2
                   OR description ILIKE $2)
            ORDER BY code ASC
            "#,
        )
        .bind(filter.department.as_deref())
        .bind(filter.search_pattern())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list courses: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_course(&self, id: Uuid) -> Result<Option<Course>> {
        sqlx::query_as::<_, Course>(
            r#"
            SELECT id, code, name, department, description, created_at, updated_at
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get course: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_approved_reviews(&self, course_ids: &[Uuid]) -> Result<Vec<Review>> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews \
             WHERE course_id = ANY($1) AND status = $2 \
             ORDER BY created_at DESC, id"
        );

        sqlx::query_as::<_, Review>(&sql)
            .bind(course_ids)
            .bind(ReviewStatus::Approved)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list approved reviews: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn insert_review(&self, review: CreateReview) -> Result<Review> {
        let sql = format!(
            "INSERT INTO reviews \
             (course_id, rating, difficulty, workload, comment, semester, year, anonymous_id, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {REVIEW_COLUMNS}"
        );

        sqlx::query_as::<_, Review>(&sql)
            .bind(review.course_id)
            .bind(review.rating)
            .bind(review.difficulty)
            .bind(review.workload)
            .bind(review.comment)
            .bind(review.semester)
            .bind(review.year)
            .bind(review.anonymous_id)
            .bind(ReviewStatus::Pending)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                let fk_violation = e
                    .as_database_error()
                    .and_then(|db| db.code())
                    .is_some_and(|code| code == FOREIGN_KEY_VIOLATION);
                if fk_violation {
                    return AppError::NotFound("Course not found".to_string());
                }
                tracing::error!("Failed to create review: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn flag_review(&self, review_id: Uuid, reason: &str) -> Result<Option<FlagOutcome>> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Right-hand side expressions see the pre-update row, so the CASE
        // compares the count before this increment. The row lock serializes
        // concurrent flags on the same review.
        let updated = sqlx::query_as::<_, FlaggedReviewRow>(
            r#"
            UPDATE reviews
            SET flag_count = flag_count + 1,
                status = CASE WHEN flag_count >= $2 THEN 'flagged'::review_status ELSE status END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING flag_count, status
            "#,
        )
        .bind(review_id)
        .bind(FLAG_THRESHOLD)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update review flag count: {:?}", e);
            AppError::Database(e)
        })?;

        let Some(updated) = updated else {
            tx.rollback().await.map_err(AppError::Database)?;
            return Ok(None);
        };

        let flag = sqlx::query_as::<_, Flag>(
            r#"
            INSERT INTO flags (review_id, reason)
            VALUES ($1, $2)
            RETURNING id, review_id, reason, created_at
            "#,
        )
        .bind(review_id)
        .bind(reason)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create flag: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(AppError::Database)?;

        Ok(Some(FlagOutcome {
            flag,
            flag_count: updated.flag_count,
            status: updated.status,
        }))
    }
}
