//! The expression protocol.
//!
//! An expression yields zero or more values of a declared type when
//! evaluated against a [`Frame`]. Expressions that can be mutated (variables,
//! test targets) also advertise which [`ChangeMode`]s they accept and with
//! which operand types; [`EffChange`](crate::EffChange) validates against
//! that before ever calling [`Expression::change`].

use std::fmt;

use smallvec::SmallVec;
use tern_diagnostic::{ErrorCode, ErrorGuaranteed};
use tern_ir::{ChangeMode, TypeSpec, Value, ValueType};

use crate::{Frame, ParseContext};

/// Values produced by one evaluation. Most expressions yield 0 or 1.
pub type Values = SmallVec<[Value; 4]>;

/// Owned, lazily advanced sequence of values, held across trampoline steps.
pub type ValueIter = Box<dyn Iterator<Item = Value> + Send>;

/// Result of an element constructor. `Err` proves a diagnostic was emitted.
pub type InitResult<T> = Result<T, ErrorGuaranteed>;

pub type BoxExpr = Box<dyn Expression>;

pub trait Expression: fmt::Debug + Send + Sync {
    /// Every value this expression yields. Never mutates the frame.
    fn values(&self, frame: &Frame<'_>) -> Values;

    /// The first value, if any.
    fn single(&self, frame: &Frame<'_>) -> Option<Value> {
        self.values(frame).into_iter().next()
    }

    fn return_type(&self) -> ValueType;

    /// Whether this expression yields at most one value.
    fn is_single(&self) -> bool {
        true
    }

    /// Operand types accepted for `mode`, or `None` if the mode is not
    /// supported at all. An empty slice means "accepted, without operand".
    fn accepts_change(&self, _mode: ChangeMode) -> Option<&'static [TypeSpec]> {
        None
    }

    /// Apply a change. Only called after [`Expression::accepts_change`]
    /// admitted `mode`.
    fn change(&self, _frame: &mut Frame<'_>, _values: &[Value], mode: ChangeMode) {
        unreachable!("{mode} reached an expression that accepts no changes: {self:?}")
    }

    /// A lazy iterator over the values, used by loops.
    fn iter(&self, frame: &Frame<'_>) -> Option<ValueIter> {
        let values = self.values(frame);
        Some(Box::new(values.into_iter()))
    }

    /// `(index, value)` pairs for indexable containers. Loops prefer this
    /// path so `loop-index` has something to report.
    fn indexed(&self, _frame: &Frame<'_>) -> Option<Vec<(String, Value)>> {
        None
    }

    /// Source-like text. With a frame, implementations may show current
    /// values; `debug` asks for a more explicit form.
    fn render(&self, frame: Option<&Frame<'_>>, debug: bool) -> String;
}

/// Destructure `operands` into exactly `N` expressions, or report E3007.
pub fn expect_operands<const N: usize>(
    operands: Vec<BoxExpr>,
    parse: &ParseContext<'_>,
    element: &str,
) -> InitResult<[BoxExpr; N]> {
    let found = operands.len();
    <[BoxExpr; N]>::try_from(operands).map_err(|_| {
        parse.error(
            ErrorCode::E3007,
            format!("'{element}' takes {N} operand(s) but {found} were matched"),
        )
    })
}
