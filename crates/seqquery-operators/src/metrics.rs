//! Tracing hooks for operator calls.
//!
//! This module purposefully avoids pulling heavy telemetry stacks; install a
//! subscriber in the application to see the events.

#[cfg(feature = "tracing")]
pub fn emit_span(op: &'static str, key_values: &[(&str, usize)]) {
    let span = tracing::span!(tracing::Level::TRACE, "seqquery", op);
    let _entered = span.enter();
    for (k, v) in key_values {
        tracing::trace!(%op, %k, v, "operator");
    }
}

#[cfg(not(feature = "tracing"))]
pub fn emit_span(_op: &'static str, _key_values: &[(&str, usize)]) { /* no-op */
}
