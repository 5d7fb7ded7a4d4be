use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected,
    Disconnected,
}

/// Health check result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponseDto {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub service: String,
    pub database: DatabaseStatus,
    /// Storage error text, development mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiEndpointsDto {
    pub health: String,
    pub courses: String,
    pub reviews: String,
    pub docs: String,
}

/// Root endpoint payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiInfoDto {
    pub message: String,
    pub version: String,
    pub endpoints: ApiEndpointsDto,
}
