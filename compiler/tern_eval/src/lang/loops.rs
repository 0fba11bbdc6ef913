//! `loop %objects%` sections.

use tern_diagnostic::ErrorCode;
use tern_ir::LoopId;

use crate::frame::LoopIter;
use crate::{BoxExpr, Frame, InitResult, LoopRef, ParseContext};

/// Runs its body once per value of a multi-valued expression.
///
/// Iteration state lives in the [`Frame`] under this loop's id, so the same
/// loop can be in progress in any number of concurrent runs.
#[derive(Debug)]
pub struct Loop {
    looped: BoxExpr,
    id: LoopId,
}

impl Loop {
    pub fn new(looped: BoxExpr, id: LoopId, parse: &ParseContext<'_>) -> InitResult<Self> {
        if looped.is_single() {
            return Err(parse.error(ErrorCode::E3004, "Cannot loop a single value"));
        }
        Ok(Loop { looped, id })
    }

    pub fn id(&self) -> LoopId {
        self.id
    }

    /// What expressions inside the body use to refer to this loop.
    pub fn loop_ref(&self) -> LoopRef {
        LoopRef {
            id: self.id,
            looped_type: self.looped.return_type(),
        }
    }

    /// Move to the next element. Returns `false` once exhausted, leaving no
    /// state behind in the frame.
    pub(crate) fn advance(&self, frame: &mut Frame<'_>) -> bool {
        if !frame.has_loop_state(self.id) {
            let iter = match self.looped.indexed(frame) {
                Some(entries) => LoopIter::Indexed(entries.into_iter()),
                None => match self.looped.iter(frame) {
                    Some(values) => LoopIter::Values(values),
                    None => return false,
                },
            };
            tracing::debug!(loop_id = ?self.id, context = %frame.id(), "enter loop");
            frame.start_loop(self.id, iter);
        }
        let more = frame.advance_loop(self.id);
        if !more {
            tracing::debug!(loop_id = ?self.id, context = %frame.id(), "loop exhausted");
        }
        more
    }

    pub fn render(&self, frame: Option<&Frame<'_>>, debug: bool) -> String {
        format!("loop {}", self.looped.render(frame, debug))
    }
}
