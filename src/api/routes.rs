//! Route definitions for the admin API.

use axum::{
    routing::{any, get},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api::handlers;
use crate::level::LevelController;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::set_log_level),
    components(schemas(
        crate::api::types::LogLevelRequest,
        crate::api::types::LogLevelResponse,
        crate::error::ErrorResponse,
        crate::level::Severity,
    )),
    tags(
        (name = "admin", description = "Runtime log level control")
    ),
    info(
        title = "levelgate admin API",
        version = "0.1.0",
        description = "Adjusts the minimum log level of a running process",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the admin router around the shared threshold.
pub fn build_router(level: LevelController) -> Router {
    Router::new()
        .route("/admin/log-level", any(handlers::set_log_level))
        .with_state(level)
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(TraceLayer::new_for_http())
}
