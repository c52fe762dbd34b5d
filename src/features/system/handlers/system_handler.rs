use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::core::error::AppError;
use crate::features::system::dtos::{EndpointsDto, HealthResponseDto, RootResponseDto};

/// Health check (no dependencies are probed)
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponseDto)
    ),
    tag = "system"
)]
pub async fn health_check() -> Json<HealthResponseDto> {
    Json(HealthResponseDto {
        success: true,
        message: "School Management API is running".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// List the available endpoints
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Endpoint discovery", body = RootResponseDto)
    ),
    tag = "system"
)]
pub async fn root() -> Json<RootResponseDto> {
    Json(RootResponseDto {
        success: true,
        message: "Welcome to School Management API".to_string(),
        endpoints: EndpointsDto {
            add_school: "POST /api/addSchool".to_string(),
            list_schools: "GET /api/listSchools?latitude={lat}&longitude={lon}".to_string(),
            get_school: "GET /api/schools/{id}".to_string(),
            health: "GET /health".to_string(),
            docs: "GET /swagger-ui/".to_string(),
        },
    })
}

/// Fallback for unmatched routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}
