//! Error types for levelgate.
//!
//! `LogError` covers construction and sink failures. `AdminError` covers the
//! admin endpoint and maps cleanly to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Errors raised while building a logger or handing a record to a sink.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("log level unknown: {0}")]
    UnknownLevel(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Sink unavailable: {0}")]
    Sink(String),
}

/// Rejections of a level-change request. None of these touch the threshold.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("method {0} not supported, expected PUT")]
    MethodNotAllowed(String),

    #[error("parsing request: {0}")]
    InvalidPayload(String),

    #[error("log level unknown: {0}")]
    UnknownLevel(String),
}

/// Error response body for admin clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl AdminError {
    fn code(&self) -> &'static str {
        match self {
            AdminError::MethodNotAllowed(_) => "METHOD_NOT_SUPPORTED",
            AdminError::InvalidPayload(_) => "INVALID_PAYLOAD",
            AdminError::UnknownLevel(_) => "UNKNOWN_LEVEL",
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        tracing::warn!(code = self.code(), error = %self, "Rejected log level request");

        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Result type alias for admin handlers.
pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_errors_are_bad_request() {
        let errors = [
            AdminError::MethodNotAllowed("GET".into()),
            AdminError::InvalidPayload("EOF while parsing".into()),
            AdminError::UnknownLevel("XYZ".into()),
        ];
        for err in errors {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AdminError::MethodNotAllowed("GET".into()).to_string(),
            "method GET not supported, expected PUT"
        );
        assert_eq!(
            AdminError::UnknownLevel("XYZ".into()).to_string(),
            "log level unknown: XYZ"
        );
        assert_eq!(
            LogError::UnknownLevel("loud".into()).to_string(),
            "log level unknown: loud"
        );
    }
}
