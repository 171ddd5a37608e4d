//! levelgate admin server.
//!
//! Builds the process logger from configuration and serves the admin API
//! that adjusts its level at runtime.

use tokio::net::TcpListener;

use levelgate::api::build_router;
use levelgate::config::Config;
use levelgate::{logging, Attr, LogError, Logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load().map_err(LogError::from)?;

    // An unknown level name stops startup before any state is shared
    let logger = Logger::builder().with_config(&config.logging).build()?;

    // Initialize diagnostics against the same threshold as the facade
    logging::init(logger.level_controller().clone());

    tracing::info!(
        level = logger.level_controller().get().name(),
        tracing = ?logger.tracing_mode(),
        "Configuration loaded"
    );

    logger.info(
        "Starting levelgate",
        [Attr::string("version", env!("CARGO_PKG_VERSION"))],
    );

    let app = build_router(logger.level_controller().clone());

    // Start server
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Admin server listening");
    logger.debug("Admin endpoint ready", [Attr::string("address", addr)]);

    axum::serve(listener, app).await?;

    Ok(())
}
