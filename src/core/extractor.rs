use axum::{
    body::Body,
    extract::{
        rejection::{FormRejection, JsonRejection, QueryRejection},
        Form, FromRequest, FromRequestParts, Query, Request,
    },
    http::{header, request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::core::error::AppError;
use crate::shared::types::FieldLocation;
use crate::shared::validation::collect_field_errors;

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        if self.0.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge.into_response();
        }

        let message = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            _ => "Failed to parse JSON body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// Urlencoded form counterpart of `AppJson`
pub struct AppForm<T>(pub T);

impl<T, S> FromRequest<S> for AppForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppFormRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppFormRejection(rejection)),
        }
    }
}

pub struct AppFormRejection(FormRejection);

impl IntoResponse for AppFormRejection {
    fn into_response(self) -> Response {
        if self.0.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge.into_response();
        }

        AppError::BadRequest(format!("Invalid form data: {}", self.0.body_text())).into_response()
    }
}

/// A raw request payload that knows how to turn itself into a normalized value
/// once its `validator` rules pass.
pub trait ValidatedRequest: DeserializeOwned + Validate {
    type Output;

    fn into_validated(self) -> Self::Output;
}

fn validate<T: ValidatedRequest>(raw: T, location: FieldLocation) -> Result<T::Output, AppError> {
    match raw.validate() {
        Ok(()) => Ok(raw.into_validated()),
        Err(errors) => {
            let errors = collect_field_errors(&errors, location);
            tracing::debug!("Request rejected by validation: {:?}", errors);
            Err(AppError::Validation { errors })
        }
    }
}

fn is_form_encoded(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

/// Request body extractor that runs validation before the handler is called.
///
/// Urlencoded forms are decoded as forms, everything else as JSON.
pub struct ValidatedBody<T: ValidatedRequest>(pub T::Output);

impl<T, S> FromRequest<S> for ValidatedBody<T>
where
    T: ValidatedRequest,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let raw = if is_form_encoded(req.headers()) {
            let AppForm(raw) = AppForm::<T>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            raw
        } else {
            let AppJson(raw) = AppJson::<T>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            raw
        };

        validate(raw, FieldLocation::Body)
            .map(Self)
            .map_err(IntoResponse::into_response)
    }
}

/// Query string extractor that runs validation before the handler is called
pub struct ValidatedQuery<T: ValidatedRequest>(pub T::Output);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: ValidatedRequest,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| AppError::BadRequest(rejection.body_text()))?;

        validate(raw, FieldLocation::Query).map(Self)
    }
}
