//! Diagnostics sink handle shared by everything that constructs elements.
//!
//! [`ParseContext`](crate::ParseContext) is immutable, but elements still
//! need to report why they failed. The logger owns a [`DiagnosticQueue`]
//! behind a mutex so reporting works through a shared reference.

use parking_lot::Mutex;
use tern_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorGuaranteed};

#[derive(Debug, Default)]
pub struct Logger {
    queue: Mutex<DiagnosticQueue>,
    debug: bool,
}

impl Logger {
    pub fn new(config: DiagnosticConfig) -> Self {
        Logger {
            queue: Mutex::new(DiagnosticQueue::with_config(config)),
            debug: false,
        }
    }

    /// Render elements in debug form when they describe themselves in
    /// diagnostics.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Report an error and return the proof that one was reported.
    #[cold]
    pub fn error(&self, diag: Diagnostic) -> ErrorGuaranteed {
        tracing::debug!(code = %diag.code, message = %diag.message, "construction error");
        self.queue.lock().emit_error(diag)
    }

    pub fn error_count(&self) -> usize {
        self.queue.lock().error_count()
    }

    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        self.queue.lock().has_errors()
    }

    /// Take every queued diagnostic, in report order.
    pub fn flush(&self) -> Vec<Diagnostic> {
        self.queue.lock().flush()
    }
}
