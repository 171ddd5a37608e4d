//! API request and response types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::level::Severity;

/// Request to change the program log level at runtime.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogLevelRequest {
    /// One of debug, info, warn or error (case-insensitive).
    pub log_level: String,
}

/// Threshold after a successful change.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogLevelResponse {
    pub log_level: Severity,
    pub previous: Severity,
}
