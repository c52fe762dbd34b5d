use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard response envelope shared by every JSON endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A single violated field reported by request validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub location: FieldLocation,
}

/// Where the offending value was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldLocation {
    Body,
    Query,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
            error: None,
        }
    }

    pub fn error(
        message: impl Into<String>,
        errors: Option<Vec<FieldError>>,
        error: Option<String>,
    ) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            message: message.into(),
            data: None,
            errors,
            error,
        }
    }
}
