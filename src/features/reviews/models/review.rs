use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Moderation status matching the `review_status` database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "review_status", rename_all = "lowercase")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    /// Submitted, awaiting moderation
    Pending,
    /// Visible in listings and aggregates
    Approved,
    /// Hidden after repeated reader flags
    Flagged,
    /// Removed by moderation tooling
    Rejected,
}

impl ReviewStatus {
    /// Status after one more flag, given the flag count *before* that flag.
    ///
    /// Flags 1 and 2 keep the current status, the 3rd and later force
    /// `Flagged` regardless of what the status was. The Postgres store
    /// expresses the same rule as a `CASE` inside its `UPDATE`.
    #[cfg(test)]
    pub fn after_flag(self, previous_flag_count: i32) -> Self {
        if previous_flag_count >= crate::shared::constants::FLAG_THRESHOLD {
            ReviewStatus::Flagged
        } else {
            self
        }
    }

    /// Whether reviews in this status feed public listings and aggregates
    pub fn is_public(self) -> bool {
        matches!(self, ReviewStatus::Approved)
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Pending => write!(f, "PENDING"),
            ReviewStatus::Approved => write!(f, "APPROVED"),
            ReviewStatus::Flagged => write!(f, "FLAGGED"),
            ReviewStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// Academic term matching the `semester` database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "semester", rename_all = "lowercase")]
pub enum Semester {
    Spring,
    Summer,
    Fall,
    Winter,
}

/// Database model for review
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Review {
    pub id: Uuid,
    pub course_id: Uuid,
    pub rating: i32,
    pub difficulty: i32,
    pub workload: i32,
    pub comment: Option<String>,
    pub semester: Option<Semester>,
    pub year: Option<i32>,
    pub anonymous_id: String,
    pub flag_count: i32,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new review; always stored as `Pending` with no flags
#[derive(Debug, Clone)]
pub struct CreateReview {
    pub course_id: Uuid,
    pub rating: i32,
    pub difficulty: i32,
    pub workload: i32,
    pub comment: Option<String>,
    pub semester: Option<Semester>,
    pub year: Option<i32>,
    pub anonymous_id: String,
}
