use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::courses::models::{Course, CourseFilter};
use crate::features::reviews::models::{CreateReview, FlagOutcome, Review};

/// Persistence boundary for courses, reviews and flags.
///
/// Services receive an `Arc<dyn ReviewStore>` instead of a global client so
/// they can run against Postgres in production and an in-memory map in tests.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Round-trip to the backing store without touching any data
    async fn ping(&self) -> Result<()>;

    /// Courses matching `filter`, ordered by code ascending
    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>>;

    async fn find_course(&self, id: Uuid) -> Result<Option<Course>>;

    /// Approved reviews of the given courses, newest first
    async fn list_approved_reviews(&self, course_ids: &[Uuid]) -> Result<Vec<Review>>;

    /// Insert a `Pending` review with zero flags.
    ///
    /// Fails with `NotFound` if the course disappeared before the insert.
    async fn insert_review(&self, review: CreateReview) -> Result<Review>;

    /// Append a flag, bump `flag_count` and apply the threshold transition as
    /// one atomic step. Returns `None` if the review does not exist.
    async fn flag_review(&self, review_id: Uuid, reason: &str) -> Result<Option<FlagOutcome>>;
}
