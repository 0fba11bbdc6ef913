//! Per-invocation execution state.
//!
//! A [`Frame`] exists for exactly one run of one trigger. It owns the loop
//! iteration state and local variables of that run, so two invocations of
//! the same trigger (even on different threads) never see each other's
//! state, and everything is released when the run ends.

use std::fmt;

use rustc_hash::FxHashMap;
use tern_ir::{ChangeMode, LoopId, Value};

use crate::{ContextId, Slot, TriggerContext, ValueIter, VariableStore};

/// Source of a loop's elements.
pub(crate) enum LoopIter {
    Values(ValueIter),
    Indexed(std::vec::IntoIter<(String, Value)>),
}

impl LoopIter {
    fn next_entry(&mut self) -> Option<(Option<String>, Value)> {
        match self {
            LoopIter::Values(iter) => iter.next().map(|value| (None, value)),
            LoopIter::Indexed(iter) => iter.next().map(|(index, value)| (Some(index), value)),
        }
    }
}

/// Iteration state of one active loop.
pub(crate) struct LoopState {
    iter: LoopIter,
    current: Option<Value>,
    index: Option<String>,
}

pub struct Frame<'a> {
    context: &'a dyn TriggerContext,
    id: ContextId,
    globals: &'a VariableStore,
    locals: FxHashMap<String, Slot>,
    loops: FxHashMap<LoopId, LoopState>,
}

impl<'a> Frame<'a> {
    pub fn new(context: &'a dyn TriggerContext, globals: &'a VariableStore) -> Self {
        Frame {
            context,
            id: ContextId::fresh(),
            globals,
            locals: FxHashMap::default(),
            loops: FxHashMap::default(),
        }
    }

    pub fn context(&self) -> &'a dyn TriggerContext {
        self.context
    }

    pub fn id(&self) -> ContextId {
        self.id
    }

    pub fn globals(&self) -> &'a VariableStore {
        self.globals
    }

    pub fn local(&self, name: &str) -> Option<&Slot> {
        self.locals.get(name)
    }

    pub fn change_local(&mut self, name: &str, list: bool, operands: &[Value], mode: ChangeMode) {
        let current = self.locals.remove(name);
        if let Some(next) = Slot::apply(current, list, operands, mode) {
            self.locals.insert(name.to_string(), next);
        }
    }

    /// Whether the loop has an iteration in progress in this run.
    pub fn has_loop_state(&self, id: LoopId) -> bool {
        self.loops.contains_key(&id)
    }

    /// Value of the loop's current iteration.
    pub fn loop_value(&self, id: LoopId) -> Option<&Value> {
        self.loops.get(&id).and_then(|state| state.current.as_ref())
    }

    /// Index of the loop's current iteration, when looping a container.
    pub fn loop_index(&self, id: LoopId) -> Option<&str> {
        self.loops.get(&id).and_then(|state| state.index.as_deref())
    }

    pub(crate) fn start_loop(&mut self, id: LoopId, iter: LoopIter) {
        self.loops.insert(
            id,
            LoopState {
                iter,
                current: None,
                index: None,
            },
        );
    }

    /// Advance the loop to its next element. Returns `false` (and drops the
    /// loop's state) once the elements are exhausted.
    pub(crate) fn advance_loop(&mut self, id: LoopId) -> bool {
        let Some(state) = self.loops.get_mut(&id) else {
            return false;
        };
        if let Some((index, value)) = state.iter.next_entry() {
            state.current = Some(value);
            state.index = index;
            true
        } else {
            self.loops.remove(&id);
            false
        }
    }

    /// Number of loops with an iteration in progress.
    pub fn active_loops(&self) -> usize {
        self.loops.len()
    }
}

impl fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("context", &self.context.name())
            .field("id", &self.id)
            .field("locals", &self.locals)
            .field("active_loops", &self.loops.len())
            .finish_non_exhaustive()
    }
}
