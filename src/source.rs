//! Call-site capture for Debug records.
//!
//! Logger methods are `#[track_caller]`, so `Location::caller()` resolves to
//! the user's call rather than to the facade. The macros additionally know the
//! enclosing function's path, which is preferred over the file when present.

use std::panic::Location;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::level::Severity;

/// Where a log call was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    function: Option<&'static str>,
    file: &'static str,
    line: u32,
}

impl CallSite {
    /// The location of the nearest non-`#[track_caller]` caller.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            function: None,
            file: location.file(),
            line: location.line(),
        }
    }

    /// A call site with a known enclosing function, as produced by the macros.
    pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            function: Some(function),
            file,
            line,
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Resolve to a `source` group, or `None` when nothing usable was captured.
    pub fn resolve(&self) -> Option<Source> {
        if self.line == 0 {
            return None;
        }
        let origin = match self.function {
            Some(function) if !function.is_empty() => Origin::Function(function),
            _ if !self.file.is_empty() => Origin::File(self.file),
            _ => return None,
        };
        Some(Source {
            origin,
            line: self.line,
        })
    }
}

/// Identifying half of a [`Source`]; exactly one is ever emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Function(&'static str),
    File(&'static str),
}

/// The `source` attribute group attached to Debug records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    pub origin: Origin,
    pub line: u32,
}

impl Serialize for Source {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self.origin {
            Origin::Function(function) => map.serialize_entry("function", function)?,
            Origin::File(file) => map.serialize_entry("file", file)?,
        }
        map.serialize_entry("line", &self.line)?;
        map.end()
    }
}

/// Source group for a record at `severity`; only Debug records get one.
pub fn enrich(severity: Severity, callsite: &CallSite) -> Option<Source> {
    if severity != Severity::Debug {
        return None;
    }
    callsite.resolve()
}

/// Strip the helper suffix and any closure segments from a `type_name` taken
/// inside a function, leaving that function's qualified path.
#[doc(hidden)]
pub fn function_path(type_name: &'static str) -> &'static str {
    let mut path = type_name.strip_suffix("::__f").unwrap_or(type_name);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path
}

/// Qualified path of the enclosing function.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn __f() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::source::function_path(__type_name_of(__f))
    }};
}
