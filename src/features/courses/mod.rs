//! Public course catalogue with aggregated review statistics.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/courses` | No | List courses (`department`, `search` filters) |
//! | GET | `/api/courses/{id}` | No | Course detail with approved reviews |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CourseService;
