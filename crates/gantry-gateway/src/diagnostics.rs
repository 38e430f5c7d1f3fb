//! Diagnostic sink for non-fatal event handling failures
//!
//! Reports are **fire-and-forget**: the sink is called synchronously from the
//! event handlers, must not block, and never feeds back into the decision.
//! A malformed event must never stall the watch stream.

use gantry_common::Error;
use tracing::error;

#[cfg(test)]
use mockall::automock;

/// Receives classification failures from the event handlers
#[cfg_attr(test, automock)]
pub trait DiagnosticSink: Send + Sync {
    /// Report a failure with a message and key/value context
    fn report(&self, error: &Error, message: &str, context: &[(&'static str, String)]);
}

/// Production sink that logs through `tracing`
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&self, err: &Error, message: &str, context: &[(&'static str, String)]) {
        error!(error = %err, context = ?context, "{message}");
    }
}

/// No-op sink for callers that do not want diagnostics
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopDiagnostics;

impl DiagnosticSink for NoopDiagnostics {
    fn report(&self, _error: &Error, _message: &str, _context: &[(&'static str, String)]) {}
}
