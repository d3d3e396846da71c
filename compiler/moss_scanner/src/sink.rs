//! Injectable diagnostic sink.
//!
//! The scanner reports every decode failure as one preformatted message
//! through this seam before returning the error. The default sink drops
//! everything; [`TracingSink`] forwards to `tracing::debug!` for debug
//! builds and tooling; [`MemorySink`] collects messages so tests can
//! assert on them without global state.

use std::cell::RefCell;

/// Receives one preformatted diagnostic message per decode failure.
///
/// Emission must not affect scanner state. `record` takes `&self` so
/// collecting sinks use interior mutability.
pub trait DiagnosticSink {
    /// Record one diagnostic message.
    fn record(&self, message: &str);
}

/// Sink that drops every message. The default.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _message: &str) {}
}

/// Sink that forwards messages to `tracing` at debug level.
///
/// The crate never installs a subscriber; without one these events cost
/// a dispatch check and nothing else, which keeps release builds quiet.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, message: &str) {
        tracing::debug!(target: "moss_scanner", "{message}");
    }
}

/// Sink that stores every message, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: RefCell<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }
}
