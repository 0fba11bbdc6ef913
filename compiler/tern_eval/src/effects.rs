//! Effects: statements that do something and then continue.

mod change;

use std::fmt;

use crate::Frame;

pub use change::EffChange;

/// A statement executed for its side effect.
pub trait Effect: fmt::Debug + Send + Sync {
    fn execute(&self, frame: &mut Frame<'_>);

    fn render(&self, frame: Option<&Frame<'_>>, debug: bool) -> String;
}
