//! Diagnostic queue for collecting and deduplicating diagnostics.
//!
//! Features:
//! - Error limits to prevent overwhelming output
//! - Deduplication of identical reports (same code, span and message)
//! - `ErrorGuaranteed` proof that errors were emitted

use tern_ir::Span;

use crate::{Diagnostic, ErrorCode, ErrorGuaranteed};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
    /// Drop a diagnostic identical to one already queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Queue for collecting diagnostics during script construction.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// let guarantee = queue.emit_error(diagnostic);
/// // ... more elements are initialized
/// let all = queue.flush();
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    /// Count of errors (not warnings/notes), including dropped ones.
    error_count: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            config,
        }
    }

    /// Queue a diagnostic unless the error limit or deduplication drops
    /// it. Errors dropped by the limit still count.
    fn add(&mut self, diag: Diagnostic) {
        if self.limit_reached() {
            self.error_count += 1;
            return;
        }
        if self.config.deduplicate && self.diagnostics.contains(&diag) {
            return;
        }
        self.diagnostics.push(diag);
        self.error_count += 1;
    }

    /// Emit an error diagnostic and get proof it was emitted.
    ///
    /// The proof is returned even when the queue filtered the diagnostic:
    /// an identical or over-limit error has already been reported.
    pub fn emit_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        self.add(diag);
        ErrorGuaranteed::new()
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Get the number of errors reported so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Check if any errors were emitted and get proof if so.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    /// Return the diagnostics in report order and reset the queue.
    ///
    /// A "too many errors" diagnostic is appended when errors were dropped.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let dropped = self.error_count > self.diagnostics.len();

        let mut result: Vec<Diagnostic> = self.diagnostics.drain(..).collect();
        if dropped {
            result.push(too_many_errors(self.config.error_limit, Span::DUMMY));
        }

        self.error_count = 0;
        result
    }
}

/// Create a "too many errors" diagnostic.
#[cold]
pub fn too_many_errors(limit: usize, span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9002)
        .with_message(format!("aborting due to {limit} previous errors"))
        .with_label(span, "error limit reached here")
}

#[cfg(test)]
mod tests;
