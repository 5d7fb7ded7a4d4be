mod flag;
mod review;

pub use flag::{Flag, FlagOutcome};
pub use review::{CreateReview, Review, ReviewStatus, Semester};
