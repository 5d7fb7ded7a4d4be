//! Service-level endpoints: root info, health check and the JSON 404 fallback.

pub mod dtos;
pub mod handlers;
pub mod routes;

pub use handlers::SystemState;
