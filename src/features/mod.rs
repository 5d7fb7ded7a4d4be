pub mod courses;
pub mod reviews;
pub mod system;
