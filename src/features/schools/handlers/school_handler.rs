use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{ValidatedBody, ValidatedQuery};
use crate::features::schools::dtos::{
    CreateSchoolDto, ListSchoolsQuery, SchoolListResponseDto, SchoolResponseDto,
};
use crate::features::schools::services::SchoolService;
use crate::shared::types::ApiResponse;

/// Add a new school
#[utoipa::path(
    post,
    path = "/api/addSchool",
    request_body(
        content(
            (CreateSchoolDto = "application/json"),
            (CreateSchoolDto = "application/x-www-form-urlencoded")
        )
    ),
    responses(
        (status = 201, description = "School added successfully", body = ApiResponse<SchoolResponseDto>),
        (status = 400, description = "Validation failed"),
        (status = 413, description = "Request body too large"),
        (status = 500, description = "Failed to add school")
    ),
    tag = "schools"
)]
pub async fn add_school(
    State(service): State<Arc<SchoolService>>,
    ValidatedBody(school): ValidatedBody<CreateSchoolDto>,
) -> Result<(StatusCode, Json<ApiResponse<SchoolResponseDto>>)> {
    let created = service.add_school(school).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "School added successfully")),
    ))
}

/// List all schools sorted by distance from the caller
#[utoipa::path(
    get,
    path = "/api/listSchools",
    params(ListSchoolsQuery),
    responses(
        (status = 200, description = "Schools retrieved successfully", body = SchoolListResponseDto),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Failed to retrieve schools")
    ),
    tag = "schools"
)]
pub async fn list_schools(
    State(service): State<Arc<SchoolService>>,
    ValidatedQuery(origin): ValidatedQuery<ListSchoolsQuery>,
) -> Result<Json<SchoolListResponseDto>> {
    let schools = service.list_by_distance(origin).await?;
    Ok(Json(SchoolListResponseDto {
        success: true,
        message: "Schools retrieved successfully".to_string(),
        data: schools,
        user_location: origin.into(),
    }))
}

/// Get a single school by id
#[utoipa::path(
    get,
    path = "/api/schools/{id}",
    params(
        ("id" = i64, Path, description = "School id")
    ),
    responses(
        (status = 200, description = "School retrieved successfully", body = ApiResponse<SchoolResponseDto>),
        (status = 400, description = "Invalid school id"),
        (status = 404, description = "School not found")
    ),
    tag = "schools"
)]
pub async fn get_school(
    State(service): State<Arc<SchoolService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<SchoolResponseDto>>> {
    let id = id
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("Invalid school id '{}'", id)))?;

    let school = service.get_school(id).await?;
    Ok(Json(ApiResponse::success(
        school,
        "School retrieved successfully",
    )))
}
