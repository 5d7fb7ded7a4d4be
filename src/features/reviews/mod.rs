//! Anonymous review submission and reader flagging.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/reviews` | No | Submit a review (starts `PENDING`) |
//! | POST | `/api/reviews/{id}/flag` | No | Flag a review; the 3rd flag hides it |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReviewService;
