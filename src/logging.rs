//! Diagnostic tracing setup for levelgate.
//!
//! The crate's own `tracing` output (startup, level changes, HTTP requests)
//! follows the same `LevelController` as the facade, so one admin call
//! adjusts both.

use tracing::{subscriber::Interest, Metadata};
use tracing_subscriber::{
    filter::{dynamic_filter_fn, DynFilterFn},
    layer::{Context, SubscriberExt},
    util::SubscriberInitExt,
    Layer,
};

use crate::level::{LevelController, Severity};

/// Per-layer filter that admits events at or above the controller's level.
///
/// Callsite interest is always `sometimes`, so the controller is consulted on
/// every event rather than once per callsite.
pub fn level_filter<S>(
    level: LevelController,
) -> DynFilterFn<
    S,
    impl Fn(&Metadata<'_>, &Context<'_, S>) -> bool,
    impl Fn(&'static Metadata<'static>) -> Interest,
> {
    dynamic_filter_fn(move |metadata, _| level.enabled(Severity::from(metadata.level())))
        .with_callsite_filter(|_| Interest::sometimes())
}

/// Initialize the tracing subscriber with JSON formatting.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init(level: LevelController) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr)
                .with_filter(level_filter(level)),
        )
        .try_init();
}

/// Initialize tracing for tests (human-readable format, captured by the test harness).
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
