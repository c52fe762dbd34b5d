use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::middleware::{self, MakeRequestUuid, MakeSpanWithRequestId, PanicResponder};
use crate::core::openapi;
use crate::features::schools::{routes as schools_routes, SchoolService};
use crate::features::system::{handlers as system_handlers, routes as system_routes};

/// Build the application router with every cross-cutting layer
pub fn create_app(
    config: &AppConfig,
    swagger: &SwaggerConfig,
    school_service: Arc<SchoolService>,
) -> Router {
    let routes = Router::new()
        .merge(openapi::docs_routes(swagger))
        .merge(schools_routes::routes(school_service))
        .merge(system_routes::routes());

    with_layers(config, routes)
}

/// Wrap `routes` in the layer stack.
///
/// Layers, outermost first: request id, tracing, request id propagation,
/// CORS, security headers, panic catcher and body limit.
fn with_layers(config: &AppConfig, routes: Router) -> Router {
    let app = routes
        .method_not_allowed_fallback(system_handlers::not_found)
        .layer(DefaultBodyLimit::max(config.max_request_body_size))
        .layer(CatchPanicLayer::custom(PanicResponder {
            expose_details: config.expose_internal_errors(),
        }));

    middleware::with_security_headers(app)
        .layer(middleware::cors_layer(&config.cors_allowed_origins))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
