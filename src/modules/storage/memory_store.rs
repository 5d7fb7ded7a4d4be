//! In-memory [`ReviewStore`] backing the test suite.
//!
//! Each review lives in its own `DashMap` entry, so the flag read-modify-write
//! runs under that entry's shard lock the same way the SQL update runs under
//! a row lock.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

use super::ReviewStore;
use crate::core::error::{AppError, Result};
use crate::features::courses::models::{Course, CourseFilter};
use crate::features::reviews::models::{
    CreateReview, Flag, FlagOutcome, Review, ReviewStatus, Semester,
};

#[derive(Default)]
pub struct MemoryReviewStore {
    courses: DashMap<Uuid, Course>,
    reviews: DashMap<Uuid, Review>,
    flags: DashMap<Uuid, Vec<Flag>>,
    /// Simulates an unreachable database
    offline: AtomicBool,
}

/// Fields for seeding a review directly in a given moderation state
#[derive(Debug, Clone)]
pub struct SeedReview {
    pub rating: i32,
    pub difficulty: i32,
    pub workload: i32,
    pub comment: Option<String>,
    pub semester: Option<Semester>,
    pub year: Option<i32>,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
}

impl SeedReview {
    pub fn approved(rating: i32, difficulty: i32, workload: i32) -> Self {
        Self {
            rating,
            difficulty,
            workload,
            comment: None,
            semester: None,
            year: None,
            status: ReviewStatus::Approved,
            created_at: Utc::now(),
        }
    }

    pub fn with_status(mut self, status: ReviewStatus) -> Self {
        self.status = status;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

impl MemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    pub fn insert_course(
        &self,
        code: &str,
        name: &str,
        department: &str,
        description: Option<&str>,
    ) -> Course {
        assert!(
            !self.courses.iter().any(|c| c.code == code),
            "course code {code} already exists"
        );

        let now = Utc::now();
        let course = Course {
            id: Uuid::new_v4(),
            code: code.to_string(),
            name: name.to_string(),
            department: department.to_string(),
            description: description.map(str::to_string),
            created_at: now,
            updated_at: now,
        };
        self.courses.insert(course.id, course.clone());
        course
    }

    pub fn course_by_code(&self, code: &str) -> Option<Course> {
        self.courses
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.value().clone())
    }

    pub fn seed_review(&self, course_id: Uuid, seed: SeedReview) -> Review {
        let review = Review {
            id: Uuid::new_v4(),
            course_id,
            rating: seed.rating,
            difficulty: seed.difficulty,
            workload: seed.workload,
            comment: seed.comment,
            semester: seed.semester,
            year: seed.year,
            anonymous_id: crate::features::reviews::services::generate_anonymous_id(),
            flag_count: 0,
            status: seed.status,
            created_at: seed.created_at,
            updated_at: seed.created_at,
        };
        self.reviews.insert(review.id, review.clone());
        review
    }

    pub fn review(&self, id: Uuid) -> Option<Review> {
        self.reviews.get(&id).map(|r| r.clone())
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    pub fn flags_for(&self, review_id: Uuid) -> Vec<Flag> {
        self.flags
            .get(&review_id)
            .map(|f| f.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ReviewStore for MemoryReviewStore {
    async fn ping(&self) -> Result<()> {
        self.check_online()
    }

    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>> {
        self.check_online()?;

        let mut courses: Vec<Course> = self
            .courses
            .iter()
            .filter(|c| filter.matches(c.value()))
            .map(|c| c.value().clone())
            .collect();
        courses.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(courses)
    }

    async fn find_course(&self, id: Uuid) -> Result<Option<Course>> {
        self.check_online()?;
        Ok(self.courses.get(&id).map(|c| c.clone()))
    }

    async fn list_approved_reviews(&self, course_ids: &[Uuid]) -> Result<Vec<Review>> {
        self.check_online()?;

        let mut reviews: Vec<Review> = self
            .reviews
            .iter()
            .filter(|r| r.status == ReviewStatus::Approved && course_ids.contains(&r.course_id))
            .map(|r| r.value().clone())
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(reviews)
    }

    async fn insert_review(&self, review: CreateReview) -> Result<Review> {
        self.check_online()?;

        if !self.courses.contains_key(&review.course_id) {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        let now = Utc::now();
        let review = Review {
            id: Uuid::new_v4(),
            course_id: review.course_id,
            rating: review.rating,
            difficulty: review.difficulty,
            workload: review.workload,
            comment: review.comment,
            semester: review.semester,
            year: review.year,
            anonymous_id: review.anonymous_id,
            flag_count: 0,
            status: ReviewStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn flag_review(&self, review_id: Uuid, reason: &str) -> Result<Option<FlagOutcome>> {
        self.check_online()?;

        let Some(mut review) = self.reviews.get_mut(&review_id) else {
            return Ok(None);
        };

        let now = Utc::now();
        let flag = Flag {
            id: Uuid::new_v4(),
            review_id,
            reason: reason.to_string(),
            created_at: now,
        };

        review.status = review.status.after_flag(review.flag_count);
        review.flag_count += 1;
        review.updated_at = now;

        self.flags.entry(review_id).or_default().push(flag.clone());

        Ok(Some(FlagOutcome {
            flag,
            flag_count: review.flag_count,
            status: review.status,
        }))
    }
}
