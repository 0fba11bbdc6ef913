//! Statements and the trampoline that runs them.
//!
//! The loader hands over a tree of [`Item`]s. [`TriggerBuilder`] flattens it
//! into an arena where every node knows its successor (`next`), its
//! enclosing section (`parent`) and, for sections, its first body statement.
//! [`Execution`] then walks that graph one node at a time: each step runs a
//! node and returns the id of the node to run next. Nesting depth never
//! turns into native recursion.

mod conditional;
mod execution;
mod loops;
mod trigger;

pub use conditional::{Conditional, ConditionalMode};
pub use execution::{Execution, RunOutcome, Step};
pub use loops::Loop;
pub use trigger::{Item, Trigger, TriggerBuilder};
