//! Construction-time context handed to every element `init`.

use tern_diagnostic::{Diagnostic, ErrorCode, ErrorGuaranteed};
use tern_ir::{LoopId, Span, ValueType};

use crate::{Logger, Registry};

/// A loop enclosing the position being matched.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LoopRef {
    pub id: LoopId,
    /// Return type of the looped expression.
    pub looped_type: ValueType,
}

/// Everything the matcher knows about one matched element.
///
/// Built by the loader for each match and read-only afterwards. The
/// [`Logger`] it points at is the only thing an `init` may mutate.
#[derive(Clone, Debug)]
pub struct ParseContext<'a> {
    registry: &'a Registry,
    logger: &'a Logger,
    current_contexts: &'a [&'static str],
    loops: &'a [LoopRef],
    element: String,
    expression: String,
    matches: Vec<String>,
    parse_mark: u32,
    span: Span,
}

impl<'a> ParseContext<'a> {
    pub fn new(registry: &'a Registry, logger: &'a Logger) -> Self {
        ParseContext {
            registry,
            logger,
            current_contexts: &[],
            loops: &[],
            element: String::new(),
            expression: String::new(),
            matches: Vec::new(),
            parse_mark: 0,
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn with_contexts(mut self, contexts: &'a [&'static str]) -> Self {
        self.current_contexts = contexts;
        self
    }

    /// Loops enclosing the match, outermost first.
    #[must_use]
    pub fn with_loops(mut self, loops: &'a [LoopRef]) -> Self {
        self.loops = loops;
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = element.into();
        self
    }

    #[must_use]
    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = expression.into();
        self
    }

    #[must_use]
    pub fn with_matches(mut self, matches: Vec<String>) -> Self {
        self.matches = matches;
        self
    }

    #[must_use]
    pub fn with_parse_mark(mut self, parse_mark: u32) -> Self {
        self.parse_mark = parse_mark;
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn logger(&self) -> &'a Logger {
        self.logger
    }

    /// Context kinds the enclosing trigger's event can produce.
    pub fn current_contexts(&self) -> &'a [&'static str] {
        self.current_contexts
    }

    pub fn loops(&self) -> &'a [LoopRef] {
        self.loops
    }

    /// The pattern element that matched.
    pub fn element(&self) -> &str {
        &self.element
    }

    /// The source text that matched.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Regex group captures from the match.
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    /// Marks accumulated from `N¦` prefixes in the matched alternatives.
    pub fn parse_mark(&self) -> u32 {
        self.parse_mark
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn is_debug(&self) -> bool {
        self.logger.is_debug()
    }

    /// Report a construction error labelled at the matched span.
    #[cold]
    pub fn error(&self, code: ErrorCode, message: impl Into<String>) -> ErrorGuaranteed {
        let message = message.into();
        let diag = Diagnostic::error(code)
            .with_message(message.clone())
            .with_label(self.span, message);
        self.logger.error(diag)
    }
}

#[cfg(test)]
mod tests;
