//! `if`, `else if` and `else` sections.

use std::fmt;

use tern_diagnostic::ErrorCode;
use tern_ir::{Span, StmtId, ValueType};

use crate::{BoxExpr, Frame, InitResult, ParseContext};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConditionalMode {
    If,
    ElseIf,
    Else,
}

impl fmt::Display for ConditionalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionalMode::If => f.write_str("if"),
            ConditionalMode::ElseIf => f.write_str("else if"),
            ConditionalMode::Else => f.write_str("else"),
        }
    }
}

/// Where a conditional sends the trampoline.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Branch {
    Body,
    Fallback(StmtId),
    Skip,
}

/// One link of an `if` / `else if` / `else` chain.
///
/// The chain is held through `fallback`: an `if` points at its `else if`,
/// which points at the next one, and so on. Only the head is a sibling in
/// its section; the other links share the head's successor.
#[derive(Debug)]
pub struct Conditional {
    mode: ConditionalMode,
    condition: Option<BoxExpr>,
    fallback: Option<StmtId>,
    span: Span,
}

impl Conditional {
    /// `condition` must be present unless `mode` is `else`.
    pub fn new(
        mode: ConditionalMode,
        condition: Option<BoxExpr>,
        parse: &ParseContext<'_>,
    ) -> InitResult<Self> {
        match (&condition, mode) {
            (Some(_), ConditionalMode::Else) => {
                return Err(parse.error(ErrorCode::E3007, "'else' does not take a condition"));
            }
            (None, ConditionalMode::If | ConditionalMode::ElseIf) => {
                return Err(parse.error(ErrorCode::E3007, format!("'{mode}' needs a condition")));
            }
            (Some(condition), _) if !ValueType::Boolean.is_assignable_to(condition.return_type()) => {
                let rendered = condition.render(None, parse.is_debug());
                return Err(parse.error(
                    ErrorCode::E3007,
                    format!("'{rendered}' is not a condition"),
                ));
            }
            _ => {}
        }
        Ok(Conditional {
            mode,
            condition,
            fallback: None,
            span: parse.span(),
        })
    }

    pub fn mode(&self) -> ConditionalMode {
        self.mode
    }

    pub fn fallback(&self) -> Option<StmtId> {
        self.fallback
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub(crate) fn set_fallback(&mut self, fallback: StmtId) {
        self.fallback = Some(fallback);
    }

    /// Decide the branch for this frame. An empty condition is false.
    pub(crate) fn branch(&self, frame: &Frame<'_>) -> Branch {
        let holds = match &self.condition {
            None => true,
            Some(condition) => condition
                .single(frame)
                .and_then(|value| value.as_bool())
                .unwrap_or(false),
        };
        let branch = match (holds, self.fallback) {
            (true, _) => Branch::Body,
            (false, Some(fallback)) => Branch::Fallback(fallback),
            (false, None) => Branch::Skip,
        };
        tracing::debug!(mode = %self.mode, ?branch, "conditional");
        branch
    }

    pub fn render(&self, frame: Option<&Frame<'_>>, debug: bool) -> String {
        match &self.condition {
            Some(condition) => format!("{} {}", self.mode, condition.render(frame, debug)),
            None => self.mode.to_string(),
        }
    }
}
