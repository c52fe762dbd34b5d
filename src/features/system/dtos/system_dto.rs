use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness payload for `/health`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponseDto {
    pub success: bool,
    pub message: String,
    /// ISO 8601 UTC timestamp
    pub timestamp: String,
}

/// Discovery payload for `/`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RootResponseDto {
    pub success: bool,
    pub message: String,
    pub endpoints: EndpointsDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EndpointsDto {
    pub add_school: String,
    pub list_schools: String,
    pub get_school: String,
    pub health: String,
    pub docs: String,
}
