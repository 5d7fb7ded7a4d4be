mod anonymizer;
mod review_service;

pub use anonymizer::generate_anonymous_id;
pub use review_service::ReviewService;
