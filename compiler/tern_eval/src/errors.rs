//! Errors a trigger run can end with.

use tern_diagnostic::{Diagnostic, ErrorCode};
use tern_ir::{Span, StmtId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// The configured step budget ran out before the trigger finished.
    #[error("[{}] step limit of {limit} reached before the trigger finished (at {at:?})", ErrorCode::E6001)]
    StepLimit { limit: u64, at: StmtId },
}

impl RunError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RunError::StepLimit { .. } => ErrorCode::E6001,
        }
    }

    /// This error as a diagnostic, for embedders that report both kinds
    /// through the same renderer.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(Span::DUMMY, "while running this trigger")
    }
}
