//! The logging facade.
//!
//! Every call runs the same pipeline: threshold check, record assembly,
//! source enrichment for Debug, trace enrichment for context-aware calls, and
//! a single synchronous hand-off to the sink. Logging never fails the caller.

use std::sync::Arc;

use opentelemetry::Context;

use crate::config::LoggingConfig;
use crate::error::LogError;
use crate::level::{LevelController, Severity};
use crate::record::{Attr, Record};
use crate::sink::{JsonSink, Sink};
use crate::source::{self, CallSite};
use crate::trace::TracingMode;

/// Structured logger with a runtime-adjustable threshold.
///
/// The per-severity methods locate their caller through `#[track_caller]`,
/// which yields a file and line but no function name, so their Debug records
/// carry `source.file`. The [`debug!`](crate::debug) family of macros records
/// the enclosing function as `source.function` instead.
#[derive(Clone)]
pub struct Logger {
    level: LevelController,
    tracing: TracingMode,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Info threshold, tracing disabled, JSON lines on stderr.
    pub fn new() -> Self {
        Self {
            level: LevelController::default(),
            tracing: TracingMode::Disabled,
            sink: Arc::new(JsonSink::stderr()),
        }
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// The threshold shared with the admin endpoint.
    pub fn level_controller(&self) -> &LevelController {
        &self.level
    }

    pub fn tracing_mode(&self) -> TracingMode {
        self.tracing
    }

    /// Whether a call at `severity` would currently be emitted.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.level.enabled(severity)
    }

    /// Log at Debug. The record's source names the calling file and line;
    /// use [`debug!`](crate::debug) to name the calling function.
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>, attrs: impl IntoIterator<Item = Attr>) {
        self.log(None, Severity::Debug, message, attrs);
    }

    /// Log at Debug with trace correlation from `ctx`. Source as for [`Logger::debug`].
    #[track_caller]
    pub fn debug_ctx(
        &self,
        ctx: &Context,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) {
        self.log(Some(ctx), Severity::Debug, message, attrs);
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>, attrs: impl IntoIterator<Item = Attr>) {
        self.log(None, Severity::Info, message, attrs);
    }

    #[track_caller]
    pub fn info_ctx(
        &self,
        ctx: &Context,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) {
        self.log(Some(ctx), Severity::Info, message, attrs);
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<String>, attrs: impl IntoIterator<Item = Attr>) {
        self.log(None, Severity::Warn, message, attrs);
    }

    #[track_caller]
    pub fn warn_ctx(
        &self,
        ctx: &Context,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) {
        self.log(Some(ctx), Severity::Warn, message, attrs);
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>, attrs: impl IntoIterator<Item = Attr>) {
        self.log(None, Severity::Error, message, attrs);
    }

    #[track_caller]
    pub fn error_ctx(
        &self,
        ctx: &Context,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) {
        self.log(Some(ctx), Severity::Error, message, attrs);
    }

    /// Log at `severity`, attributing the record to the caller's location.
    #[track_caller]
    pub fn log(
        &self,
        ctx: Option<&Context>,
        severity: Severity,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) {
        if !self.enabled(severity) {
            return;
        }
        self.emit(CallSite::caller(), ctx, severity, message.into(), attrs);
    }

    /// Log at `severity` with an explicit call site. Used by the macros.
    pub fn log_at(
        &self,
        callsite: CallSite,
        ctx: Option<&Context>,
        severity: Severity,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) {
        if !self.enabled(severity) {
            return;
        }
        self.emit(callsite, ctx, severity, message.into(), attrs);
    }

    fn emit(
        &self,
        callsite: CallSite,
        ctx: Option<&Context>,
        severity: Severity,
        message: String,
        attrs: impl IntoIterator<Item = Attr>,
    ) {
        let mut record = Record::new(severity, message);
        record.add_attrs(attrs);
        record.source = source::enrich(severity, &callsite);
        record.add_attrs(self.tracing.attrs(ctx));

        if let Err(e) = self.sink.handle(ctx, record) {
            tracing::debug!(error = %e, "Log sink rejected record");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level.get())
            .field("tracing", &self.tracing)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
enum LevelSetting {
    Name(String),
    Severity(Severity),
}

/// Builder for [`Logger`].
///
/// Level names are validated in [`LoggerBuilder::build`]; an unknown name
/// produces no logger and leaves any supplied controller untouched.
pub struct LoggerBuilder {
    level: LevelSetting,
    tracing: TracingMode,
    sink: Option<Arc<dyn Sink>>,
    controller: Option<LevelController>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            level: LevelSetting::Severity(Severity::default()),
            tracing: TracingMode::Disabled,
            sink: None,
            controller: None,
        }
    }
}

impl LoggerBuilder {
    /// Initial threshold by name, case-insensitive.
    pub fn log_level(mut self, name: impl Into<String>) -> Self {
        self.level = LevelSetting::Name(name.into());
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.level = LevelSetting::Severity(severity);
        self
    }

    /// Attach `traceId` / `spanId` to context-aware calls.
    pub fn otel_tracing(self) -> Self {
        self.tracing_mode(TracingMode::OpenTelemetry)
    }

    pub fn tracing_mode(mut self, mode: TracingMode) -> Self {
        self.tracing = mode;
        self
    }

    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Share an existing threshold instead of creating a new one.
    pub fn level_controller(mut self, controller: LevelController) -> Self {
        self.controller = Some(controller);
        self
    }

    pub fn with_config(self, config: &LoggingConfig) -> Self {
        self.log_level(config.level.clone())
            .tracing_mode(config.tracing)
    }

    pub fn build(self) -> Result<Logger, LogError> {
        let initial = match self.level {
            LevelSetting::Name(name) => name.parse::<Severity>()?,
            LevelSetting::Severity(severity) => severity,
        };

        let level = match self.controller {
            Some(controller) => {
                controller.set(initial);
                controller
            }
            None => LevelController::new(initial),
        };

        Ok(Logger {
            level,
            tracing: self.tracing,
            sink: self
                .sink
                .unwrap_or_else(|| Arc::new(JsonSink::stderr())),
        })
    }
}
