//! Admin HTTP surface.
//!
//! A single endpoint adjusts the shared log threshold at runtime.

pub mod handlers;
mod routes;
mod types;

pub use routes::{build_router, ApiDoc};
pub use types::{LogLevelRequest, LogLevelResponse};
