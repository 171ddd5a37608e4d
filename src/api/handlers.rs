//! HTTP request handlers.

use axum::{body::Bytes, extract::State, http::Method, Json};

use crate::api::types::{LogLevelRequest, LogLevelResponse};
use crate::error::{AdminError, AdminResult};
use crate::level::{LevelController, Severity};

/// Change the program log level.
///
/// PUT /admin/log-level
///
/// Any other method is rejected with 400 and leaves the level unchanged.
#[utoipa::path(
    put,
    path = "/admin/log-level",
    request_body = LogLevelRequest,
    responses(
        (status = 200, description = "Log level changed", body = LogLevelResponse),
        (status = 400, description = "Wrong method, malformed payload or unknown level", body = crate::error::ErrorResponse)
    ),
    tag = "admin"
)]
pub async fn set_log_level(
    State(level): State<LevelController>,
    method: Method,
    body: Bytes,
) -> AdminResult<Json<LogLevelResponse>> {
    if method != Method::PUT {
        return Err(AdminError::MethodNotAllowed(method.to_string()));
    }

    let request: LogLevelRequest =
        serde_json::from_slice(&body).map_err(|e| AdminError::InvalidPayload(e.to_string()))?;

    let severity = request
        .log_level
        .parse::<Severity>()
        .map_err(|_| AdminError::UnknownLevel(request.log_level.clone()))?;

    let previous = level.set(severity);

    tracing::info!(
        previous = previous.name(),
        current = severity.name(),
        "Log level changed"
    );

    Ok(Json(LogLevelResponse {
        log_level: severity,
        previous,
    }))
}
