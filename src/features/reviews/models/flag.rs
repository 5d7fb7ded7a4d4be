use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::ReviewStatus;
use crate::shared::constants::FLAG_THRESHOLD;

/// Database model for flag (append-only)
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Flag {
    pub id: Uuid,
    pub review_id: Uuid,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

/// Result of one atomic flag operation
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct FlagOutcome {
    pub flag: Flag,
    /// Flag count after this flag was counted
    pub flag_count: i32,
    pub status: ReviewStatus,
}

impl FlagOutcome {
    /// True for the single flag that moved the review into `Flagged`
    pub fn crossed_threshold(&self) -> bool {
        self.flag_count - 1 == FLAG_THRESHOLD
    }
}
