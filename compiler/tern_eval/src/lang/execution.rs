//! The trampoline.

use tern_ir::StmtId;

use super::trigger::Trigger;
use crate::{Frame, RunError};

/// Result of one [`Execution::step`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Step {
    /// More statements remain; this one runs next.
    Continue(StmtId),
    Done,
}

/// How a trigger run ended.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum RunOutcome {
    Completed { steps: u64 },
    /// The trigger's event does not handle the context.
    Skipped,
}

/// One run of a trigger: a frame plus a cursor into the statement graph.
#[derive(Debug)]
pub struct Execution<'t, 'f> {
    trigger: &'t Trigger,
    frame: Frame<'f>,
    cursor: Option<StmtId>,
    steps: u64,
    debug_render: bool,
}

impl<'t, 'f> Execution<'t, 'f> {
    pub fn new(trigger: &'t Trigger, frame: Frame<'f>) -> Self {
        Execution {
            trigger,
            frame,
            cursor: trigger.entry(),
            steps: 0,
            debug_render: false,
        }
    }

    /// Render statements in debug form in trace output.
    #[must_use]
    pub fn with_debug_render(mut self, debug_render: bool) -> Self {
        self.debug_render = debug_render;
        self
    }

    /// The statement that runs on the next step.
    pub fn cursor(&self) -> Option<StmtId> {
        self.cursor
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn frame(&self) -> &Frame<'f> {
        &self.frame
    }

    pub fn into_frame(self) -> Frame<'f> {
        self.frame
    }

    /// Run the statement under the cursor and move to its successor.
    pub fn step(&mut self) -> Step {
        let Some(id) = self.cursor else {
            return Step::Done;
        };
        if tracing::enabled!(tracing::Level::TRACE) {
            let rendered = self.trigger.render(id, Some(&self.frame), self.debug_render);
            tracing::trace!(stmt = ?id, context = %self.frame.id(), "{rendered}");
        }
        self.cursor = self.trigger.walk(id, &mut self.frame);
        self.steps += 1;
        match self.cursor {
            Some(next) => Step::Continue(next),
            None => Step::Done,
        }
    }

    /// Step until the graph is exhausted. With a `step_limit`, fail instead
    /// of running more than that many statements.
    #[tracing::instrument(level = "debug", skip(self), fields(context = %self.frame.id()))]
    pub fn run(&mut self, step_limit: Option<u64>) -> Result<u64, RunError> {
        while let Some(at) = self.cursor {
            if let Some(limit) = step_limit {
                if self.steps >= limit {
                    tracing::warn!(limit, stmt = ?at, "step limit reached, stopping trigger");
                    return Err(RunError::StepLimit { limit, at });
                }
            }
            self.step();
        }
        Ok(self.steps)
    }
}
