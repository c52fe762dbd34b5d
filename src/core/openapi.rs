use std::sync::Arc;

use axum::{middleware::from_fn_with_state, Router};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::SwaggerConfig;
use crate::core::middleware;
use crate::features::schools::{dtos as schools_dtos, handlers as schools_handlers};
use crate::features::system::{dtos as system_dtos, handlers as system_handlers};
use crate::shared::types::{ApiResponse, FieldError, FieldLocation};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Schools
        schools_handlers::add_school,
        schools_handlers::list_schools,
        schools_handlers::get_school,
        // System
        system_handlers::health_check,
        system_handlers::root,
    ),
    components(
        schemas(
            // Shared
            FieldError,
            FieldLocation,
            // Schools
            schools_dtos::CreateSchoolDto,
            schools_dtos::SchoolResponseDto,
            schools_dtos::SchoolWithDistanceDto,
            schools_dtos::UserLocationDto,
            schools_dtos::SchoolListResponseDto,
            ApiResponse<schools_dtos::SchoolResponseDto>,
            // System
            system_dtos::HealthResponseDto,
            system_dtos::RootResponseDto,
            system_dtos::EndpointsDto,
        )
    ),
    tags(
        (name = "schools", description = "School registration and proximity search"),
        (name = "system", description = "Health and discovery"),
    ),
    info(
        title = "School Management API",
        version = "0.1.0",
        description = "Add schools and list them by distance",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

/// Swagger UI at /swagger-ui and the raw document at /api-docs/openapi.json,
/// behind basic auth when credentials are configured
pub fn docs_routes(config: &SwaggerConfig) -> Router {
    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier {
        title: config.title.clone(),
        version: config.version.clone(),
        description: config.description.clone(),
    }
    .modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    match config.credentials() {
        Some(credentials) => {
            tracing::info!("Swagger UI basic auth enabled");
            swagger.layer(from_fn_with_state(
                Arc::new(credentials),
                middleware::basic_auth_middleware,
            ))
        }
        None => {
            tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
            swagger
        }
    }
}
