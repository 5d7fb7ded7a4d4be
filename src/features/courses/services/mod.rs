mod aggregation;
mod course_service;

pub use aggregation::CourseStats;
pub use course_service::CourseService;
