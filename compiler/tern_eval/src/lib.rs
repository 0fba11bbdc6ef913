//! Tern Eval - execution core for Tern scripts.
//!
//! This crate runs already-matched scripts. The pattern matcher and the
//! loader live elsewhere; they hand this crate a tree of expressions and
//! statements plus a [`Registry`] of type handlers.
//!
//! # Architecture
//!
//! - [`Expression`]: typed, possibly multi-valued nodes evaluated against a
//!   [`Frame`] (one trigger invocation)
//! - [`Registry`]: range and comparator tables keyed by [`ValueType`], plus
//!   descriptions of the syntax elements this crate provides
//! - [`EffChange`]: the generic set/add/remove/delete/reset effect
//! - [`ExprRange`]: ordered ranges between two endpoints
//! - [`Trigger`]: a flattened statement graph walked by the trampoline in
//!   [`Execution`], so nesting never consumes native stack
//! - [`Runtime`]: configuration, shared variables and the entry point that
//!   runs a trigger for a context
//!
//! # Logging
//!
//! Everything logs through `tracing`. Call [`init_tracing`] once and set
//! `TERN_LOG=tern_eval=debug` (or `trace` for one line per statement).

mod context;
pub mod effects;
pub mod errors;
mod expr;
pub mod expressions;
mod frame;
pub mod lang;
mod logger;
mod parse_context;
pub mod registry;
mod runtime;
mod shared;
mod stack;
mod tracing_setup;
mod variables;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use tern_diagnostic::{Diagnostic, DiagnosticConfig, ErrorCode, ErrorGuaranteed};
pub use tern_ir::{ChangeMode, LoopId, Relation, Span, StmtId, TypeSpec, Value, ValueType};

pub use context::{ContextId, Event, ScriptLoadContext, ScriptLoadEvent, TriggerContext};
pub use effects::{EffChange, Effect};
pub use errors::RunError;
pub use expr::{expect_operands, BoxExpr, Expression, InitResult, ValueIter, Values};
pub use expressions::{ExprLoopValue, ExprRange, LitMathConstants, Literal, Variable};
pub use frame::Frame;
pub use lang::{
    Conditional, ConditionalMode, Execution, Item, Loop, RunOutcome, Step, Trigger, TriggerBuilder,
};
pub use logger::Logger;
pub use parse_context::{LoopRef, ParseContext};
pub use registry::{Comparator, ElementInit, RangeInfo, Registry, SyntaxInfo, SyntaxKind};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use shared::SharedRegistry;
pub use stack::ensure_sufficient_stack;
pub use tracing_setup::init_tracing;
pub use variables::{Slot, VariableStore};
