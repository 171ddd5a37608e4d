//! levelgate - structured logging facade.
//!
//! Wraps a record sink with three additions:
//! - a shared, runtime-adjustable minimum level ([`LevelController`]) that an
//!   admin endpoint can change ([`api::build_router`]);
//! - a `source` group (function or file, plus line) on Debug records;
//! - `traceId` / `spanId` attributes taken from an OpenTelemetry context on
//!   context-aware calls, when enabled.
//!
//! ```no_run
//! use levelgate::{Attr, Logger};
//!
//! let logger = Logger::builder().log_level("warn").build()?;
//! logger.warn("disk almost full", [Attr::string("mount", "/var")]);
//! # Ok::<(), levelgate::LogError>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod logging;
mod macros;
pub mod record;
pub mod sink;
pub mod source;
pub mod trace;

pub use error::{AdminError, LogError};
pub use level::{LevelController, Severity};
pub use logger::{Logger, LoggerBuilder};
pub use record::{Attr, Record, Value};
pub use sink::{JsonSink, MemorySink, Sink};
pub use source::CallSite;
pub use trace::TracingMode;
