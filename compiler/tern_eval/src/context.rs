//! Trigger contexts and the events that admit them.
//!
//! A context is the situation a trigger runs in ("the script was loaded",
//! "a player joined"). Events decide whether a context concerns them; the
//! runtime gives every invocation its own [`ContextId`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{BoxExpr, InitResult, ParseContext};

/// Process-unique identity of one trigger invocation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ContextId(u64);

impl ContextId {
    /// Allocate a fresh id. Ids are never reused within a process.
    pub fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        ContextId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ctx#{}", self.0)
    }
}

/// The situation a trigger is running in.
///
/// Implementations carry whatever data their event exposes to expressions.
pub trait TriggerContext: fmt::Debug + Send + Sync {
    /// Kind name, matched against [`Event::handled_contexts`].
    fn name(&self) -> &'static str;
}

/// A trigger's event: decides whether a context should run the trigger.
pub trait Event: fmt::Debug + Send + Sync {
    /// Whether the trigger should run for `ctx`.
    fn check(&self, ctx: &dyn TriggerContext) -> bool;

    /// Context kinds this event can produce. Elements that only make sense in
    /// some contexts check this list through [`ParseContext::current_contexts`].
    fn handled_contexts(&self) -> &'static [&'static str];

    fn render(&self, debug: bool) -> String;
}

/// Context of the trigger that runs once when a script has been loaded.
#[derive(Clone, Debug, Default)]
pub struct ScriptLoadContext {
    args: Vec<String>,
}

impl ScriptLoadContext {
    pub const NAME: &'static str = "main";

    pub fn new(args: Vec<String>) -> Self {
        ScriptLoadContext { args }
    }

    /// Arguments the script was started with.
    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

impl TriggerContext for ScriptLoadContext {
    fn name(&self) -> &'static str {
        Self::NAME
    }
}

/// `script load[ing]`: fires once the script has been loaded.
#[derive(Copy, Clone, Debug, Default)]
pub struct ScriptLoadEvent;

impl ScriptLoadEvent {
    pub const PATTERNS: &'static [&'static str] = &["script load[ing]"];

    pub fn init(
        operands: Vec<BoxExpr>,
        _matched_pattern: usize,
        parse: &ParseContext<'_>,
    ) -> InitResult<Box<dyn Event>> {
        let [] = crate::expect_operands::<0>(operands, parse, "script load")?;
        Ok(Box::new(ScriptLoadEvent))
    }
}

impl Event for ScriptLoadEvent {
    fn check(&self, ctx: &dyn TriggerContext) -> bool {
        ctx.name() == ScriptLoadContext::NAME
    }

    fn handled_contexts(&self) -> &'static [&'static str] {
        &[ScriptLoadContext::NAME]
    }

    fn render(&self, _debug: bool) -> String {
        "script load".to_string()
    }
}
