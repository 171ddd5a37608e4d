//! Logging macros.
//!
//! Unlike the logger methods, these also record the enclosing function's
//! qualified name, which Debug records prefer over the file path. Arguments
//! are not evaluated when the severity is disabled.
//!
//! ```ignore
//! levelgate::info!(logger, "user created", Attr::string("id", id));
//! levelgate::debug!(logger, ctx: &cx, "cache lookup", Attr::bool("hit", hit));
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($logger:expr, $ctx:expr, $severity:expr, $msg:expr $(, $attr:expr)*) => {{
        let logger: &$crate::Logger = &$logger;
        let severity: $crate::Severity = $severity;
        if logger.enabled(severity) {
            logger.log_at(
                $crate::CallSite::new($crate::__function_path!(), file!(), line!()),
                $ctx,
                severity,
                $msg,
                [$($attr),*],
            );
        }
    }};
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, ctx: $ctx:expr, $msg:expr $(, $attr:expr)* $(,)?) => {
        $crate::__log!($logger, Some($ctx), $crate::Severity::Debug, $msg $(, $attr)*)
    };
    ($logger:expr, $msg:expr $(, $attr:expr)* $(,)?) => {
        $crate::__log!($logger, None, $crate::Severity::Debug, $msg $(, $attr)*)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, ctx: $ctx:expr, $msg:expr $(, $attr:expr)* $(,)?) => {
        $crate::__log!($logger, Some($ctx), $crate::Severity::Info, $msg $(, $attr)*)
    };
    ($logger:expr, $msg:expr $(, $attr:expr)* $(,)?) => {
        $crate::__log!($logger, None, $crate::Severity::Info, $msg $(, $attr)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, ctx: $ctx:expr, $msg:expr $(, $attr:expr)* $(,)?) => {
        $crate::__log!($logger, Some($ctx), $crate::Severity::Warn, $msg $(, $attr)*)
    };
    ($logger:expr, $msg:expr $(, $attr:expr)* $(,)?) => {
        $crate::__log!($logger, None, $crate::Severity::Warn, $msg $(, $attr)*)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, ctx: $ctx:expr, $msg:expr $(, $attr:expr)* $(,)?) => {
        $crate::__log!($logger, Some($ctx), $crate::Severity::Error, $msg $(, $attr)*)
    };
    ($logger:expr, $msg:expr $(, $attr:expr)* $(,)?) => {
        $crate::__log!($logger, None, $crate::Severity::Error, $msg $(, $attr)*)
    };
}
