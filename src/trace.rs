//! Trace correlation attributes from an OpenTelemetry context.

use opentelemetry::trace::{SpanId, TraceContextExt, TraceId};
use opentelemetry::Context;
use serde::{Deserialize, Serialize};

use crate::record::Attr;

pub const TRACE_ID_KEY: &str = "traceId";
pub const SPAN_ID_KEY: &str = "spanId";

/// Trace enrichment strategy, chosen once when the logger is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracingMode {
    #[default]
    Disabled,
    #[serde(rename = "otel", alias = "opentelemetry")]
    OpenTelemetry,
}

impl TracingMode {
    /// Correlation attributes for a record logged with `ctx`.
    ///
    /// Empty when disabled, when no context was passed, or when the context
    /// carries no valid span. The context is only read.
    pub fn attrs(&self, ctx: Option<&Context>) -> Vec<Attr> {
        match (self, ctx) {
            (TracingMode::OpenTelemetry, Some(ctx)) => span_attrs(ctx),
            _ => Vec::new(),
        }
    }
}

fn span_attrs(ctx: &Context) -> Vec<Attr> {
    let span = ctx.span();
    let span_context = span.span_context();
    let mut attrs = Vec::with_capacity(2);

    // Trace and span ids are checked separately; an all-zero id is absent.
    if span_context.trace_id() != TraceId::INVALID {
        attrs.push(Attr::string(TRACE_ID_KEY, span_context.trace_id().to_string()));
    }
    if span_context.span_id() != SpanId::INVALID {
        attrs.push(Attr::string(SPAN_ID_KEY, span_context.span_id().to_string()));
    }

    attrs
}
