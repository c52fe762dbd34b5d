use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::core::extractor::ValidatedRequest;
use crate::features::schools::models::{NewSchool, School};
use crate::shared::geo::Coordinates;
use crate::shared::validation::{
    lenient_coordinate, missing_coordinate, required_address, required_name, trimmed_text,
    validate_latitude, validate_longitude,
};

/// Request DTO for adding a school
///
/// Strings are trimmed before validation; coordinates may be sent as numbers
/// or numeric strings.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSchoolDto {
    #[serde(default, deserialize_with = "trimmed_text")]
    #[validate(
        custom(function = "required_name"),
        length(min = 2, max = 255, message = "Name must be between 2 and 255 characters")
    )]
    #[schema(example = "Green Valley High School")]
    pub name: String,

    #[serde(default, deserialize_with = "trimmed_text")]
    #[validate(
        custom(function = "required_address"),
        length(min = 5, max = 500, message = "Address must be between 5 and 500 characters")
    )]
    #[schema(example = "12 Orchard Road, Springfield")]
    pub address: String,

    #[serde(default = "missing_coordinate", deserialize_with = "lenient_coordinate")]
    #[validate(custom(function = "validate_latitude"))]
    #[schema(example = 48.8566)]
    pub latitude: f64,

    #[serde(default = "missing_coordinate", deserialize_with = "lenient_coordinate")]
    #[validate(custom(function = "validate_longitude"))]
    #[schema(example = 2.3522)]
    pub longitude: f64,
}

impl ValidatedRequest for CreateSchoolDto {
    type Output = NewSchool;

    fn into_validated(self) -> NewSchool {
        NewSchool {
            name: self.name,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Query parameters for listing schools by distance
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListSchoolsQuery {
    /// Caller latitude in degrees
    #[serde(default = "missing_coordinate", deserialize_with = "lenient_coordinate")]
    #[validate(custom(function = "validate_latitude"))]
    #[param(example = 51.5074)]
    pub latitude: f64,

    /// Caller longitude in degrees
    #[serde(default = "missing_coordinate", deserialize_with = "lenient_coordinate")]
    #[validate(custom(function = "validate_longitude"))]
    #[param(example = 0.1278)]
    pub longitude: f64,
}

impl ValidatedRequest for ListSchoolsQuery {
    type Output = Coordinates;

    fn into_validated(self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Response DTO for a stored school
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SchoolResponseDto {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

impl From<School> for SchoolResponseDto {
    fn from(school: School) -> Self {
        Self {
            id: school.id,
            name: school.name,
            address: school.address,
            latitude: school.latitude,
            longitude: school.longitude,
            created_at: school.created_at,
        }
    }
}

/// A school annotated with its distance (km) from the caller
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SchoolWithDistanceDto {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    /// Great-circle distance in kilometres
    pub distance: f64,
}

impl SchoolWithDistanceDto {
    pub fn new(school: School, distance: f64) -> Self {
        Self {
            id: school.id,
            name: school.name,
            address: school.address,
            latitude: school.latitude,
            longitude: school.longitude,
            created_at: school.created_at,
            distance,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct UserLocationDto {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinates> for UserLocationDto {
    fn from(c: Coordinates) -> Self {
        Self {
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}

/// Success envelope for the list endpoint, which also echoes the caller location
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SchoolListResponseDto {
    pub success: bool,
    pub message: String,
    pub data: Vec<SchoolWithDistanceDto>,
    #[serde(rename = "userLocation")]
    pub user_location: UserLocationDto,
}
