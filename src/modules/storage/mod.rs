//! Storage module for courses, reviews and flags
//!
//! Defines the [`ReviewStore`] persistence boundary and its PostgreSQL
//! implementation. Tests use the in-memory store instead.

#[cfg(test)]
mod memory_store;
mod postgres_store;
mod review_store;

#[cfg(test)]
pub use memory_store::{MemoryReviewStore, SeedReview};
pub use postgres_store::PostgresReviewStore;
pub use review_store::ReviewStore;
