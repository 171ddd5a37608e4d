//! Severity levels and the runtime-adjustable threshold.

use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::LogError;

/// Ordered log severity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Severity {
    /// Uppercase name as rendered in log records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Lowercase name as accepted in configuration and the admin API.
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    fn from_repr(value: u8) -> Self {
        match value {
            0 => Severity::Debug,
            1 => Severity::Info,
            2 => Severity::Warn,
            _ => Severity::Error,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    /// Case-insensitive parse of `debug`, `info`, `warn` or `error`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(LogError::UnknownLevel(s.to_string())),
        }
    }
}

impl From<&tracing::Level> for Severity {
    fn from(level: &tracing::Level) -> Self {
        if *level == tracing::Level::ERROR {
            Severity::Error
        } else if *level == tracing::Level::WARN {
            Severity::Warn
        } else if *level == tracing::Level::INFO {
            Severity::Info
        } else {
            // DEBUG and TRACE
            Severity::Debug
        }
    }
}

/// Shared handle to the minimum enabled severity.
///
/// Clones share the same underlying value, so the admin endpoint and every
/// logger built from the same controller observe each other's writes.
#[derive(Debug, Clone)]
pub struct LevelController {
    level: Arc<AtomicU8>,
}

impl LevelController {
    pub fn new(initial: Severity) -> Self {
        Self {
            level: Arc::new(AtomicU8::new(initial as u8)),
        }
    }

    /// Current threshold.
    pub fn get(&self) -> Severity {
        Severity::from_repr(self.level.load(Ordering::Acquire))
    }

    /// Replace the threshold, returning the previous one.
    pub fn set(&self, severity: Severity) -> Severity {
        Severity::from_repr(self.level.swap(severity as u8, Ordering::AcqRel))
    }

    /// Whether a record at `severity` passes the current threshold.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.get()
    }
}

impl Default for LevelController {
    fn default() -> Self {
        Self::new(Severity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("DEBUG".parse::<Severity>().unwrap(), Severity::Debug);
        assert_eq!("Info".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("wArN".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "XYZ".parse::<Severity>().unwrap_err();
        assert!(matches!(err, LogError::UnknownLevel(ref s) if s == "XYZ"));
        assert!("warning".parse::<Severity>().is_err());
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_enabled_matches_threshold_for_all_pairs() {
        let controller = LevelController::default();
        for threshold in ALL {
            controller.set(threshold);
            for severity in ALL {
                assert_eq!(controller.enabled(severity), severity >= threshold);
            }
        }
    }

    #[test]
    fn test_set_returns_previous() {
        let controller = LevelController::new(Severity::Warn);
        assert_eq!(controller.set(Severity::Debug), Severity::Warn);
        assert_eq!(controller.get(), Severity::Debug);
    }

    #[test]
    fn test_set_is_idempotent() {
        let controller = LevelController::new(Severity::Info);
        for _ in 0..3 {
            controller.set(Severity::Error);
            assert_eq!(controller.get(), Severity::Error);
            assert!(!controller.enabled(Severity::Warn));
            assert!(controller.enabled(Severity::Error));
        }
    }

    #[test]
    fn test_clones_share_state() {
        let controller = LevelController::new(Severity::Info);
        let clone = controller.clone();
        clone.set(Severity::Error);
        assert_eq!(controller.get(), Severity::Error);
    }

    #[test]
    fn test_write_visible_from_other_thread() {
        let controller = LevelController::new(Severity::Info);
        let writer = controller.clone();
        thread::spawn(move || {
            writer.set(Severity::Debug);
        })
        .join()
        .unwrap();

        let reader = controller.clone();
        let seen = thread::spawn(move || reader.get()).join().unwrap();
        assert_eq!(seen, Severity::Debug);
    }

    #[test]
    fn test_concurrent_readers_and_writers_see_valid_levels() {
        let controller = LevelController::new(Severity::Info);
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let controller = controller.clone();
                thread::spawn(move || {
                    for n in 0..1000 {
                        if i % 2 == 0 {
                            controller.set(ALL[(n + i) % ALL.len()]);
                        } else {
                            assert!(ALL.contains(&controller.get()));
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(ALL.contains(&controller.get()));
    }

    #[test]
    fn test_from_tracing_level() {
        assert_eq!(Severity::from(&tracing::Level::TRACE), Severity::Debug);
        assert_eq!(Severity::from(&tracing::Level::INFO), Severity::Info);
        assert_eq!(Severity::from(&tracing::Level::ERROR), Severity::Error);
    }
}
