use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::{ApiResponse, FieldError};

/// Generic detail returned in place of the real one when details are hidden
pub const HIDDEN_ERROR_DETAIL: &str = "Something went wrong";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {} field(s) rejected", errors.len())]
    Validation { errors: Vec<FieldError> },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("{message}: {}", detail.as_deref().unwrap_or("no detail"))]
    Storage {
        message: String,
        detail: Option<String>,
    },

    #[error("Internal server error: {}", detail.as_deref().unwrap_or(HIDDEN_ERROR_DETAIL))]
    Internal { detail: Option<String> },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation { errors } => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::error("Validation failed", Some(errors), None),
            ),
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::error(message, None, None),
            ),
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ApiResponse::<()>::error(message, None, None),
            ),
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ApiResponse::<()>::error("Request body too large", None, None),
            ),
            AppError::Storage { message, detail } => {
                tracing::error!("{}: {:?}", message, detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::error(message, None, detail),
                )
            }
            AppError::Internal { detail } => {
                tracing::error!("Internal error: {:?}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::error(
                        "Internal server error",
                        None,
                        Some(detail.unwrap_or_else(|| HIDDEN_ERROR_DETAIL.to_string())),
                    ),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
