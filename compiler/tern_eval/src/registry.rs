//! Type handler registry.
//!
//! Holds the range and comparator tables keyed by [`ValueType`], plus a
//! description of each syntax element this crate provides. A registry is
//! built once before any script is loaded and only read afterwards; share
//! it with [`SharedRegistry`](crate::SharedRegistry).
//!
//! Lookups try an exact type match first and then the first entry (in
//! registration order) whose types the request is assignable to.

mod builtins;

use std::fmt;

use rustc_hash::FxHashMap;
use tern_ir::{Relation, Value, ValueType};

use crate::{BoxExpr, Effect, Event, InitResult, ParseContext};

/// Produces the ordered values between two endpoints (inclusive).
pub type RangeFn = fn(&Value, &Value) -> Vec<Value>;

/// Orders two values.
pub type ComparatorFn = fn(&Value, &Value) -> Relation;

pub type ExpressionInit = fn(Vec<BoxExpr>, usize, &ParseContext<'_>) -> InitResult<BoxExpr>;
pub type EffectInit = fn(Vec<BoxExpr>, usize, &ParseContext<'_>) -> InitResult<Box<dyn Effect>>;
pub type EventInit = fn(Vec<BoxExpr>, usize, &ParseContext<'_>) -> InitResult<Box<dyn Event>>;

/// A registered range: endpoints assignable to `from` produce `to` values.
#[derive(Copy, Clone)]
pub struct RangeInfo {
    pub from: ValueType,
    pub to: ValueType,
    pub function: RangeFn,
}

impl RangeInfo {
    pub fn apply(&self, from: &Value, to: &Value) -> Vec<Value> {
        (self.function)(from, to)
    }
}

impl fmt::Debug for RangeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RangeInfo({} -> {})", self.from, self.to)
    }
}

/// A comparator resolved for a pair of operand types.
///
/// A comparator registered for `(B, A)` answers `(A, B)` requests by
/// swapping its arguments and flipping the relation.
#[derive(Copy, Clone)]
pub struct Comparator {
    pub left: ValueType,
    pub right: ValueType,
    function: ComparatorFn,
    flipped: bool,
}

impl Comparator {
    pub fn compare(&self, left: &Value, right: &Value) -> Relation {
        if self.flipped {
            (self.function)(right, left).flip()
        } else {
            (self.function)(left, right)
        }
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Comparator({}, {}", self.left, self.right)?;
        if self.flipped {
            f.write_str(", flipped")?;
        }
        f.write_str(")")
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SyntaxKind {
    Expression,
    Effect,
    Section,
    Event,
}

/// How the loader constructs an element once one of its patterns matched.
#[derive(Copy, Clone)]
pub enum ElementInit {
    Expression(ExpressionInit),
    Effect(EffectInit),
    Event(EventInit),
    /// Sections need their body, so the loader builds them through
    /// [`TriggerBuilder`](crate::TriggerBuilder) instead.
    Section,
}

impl ElementInit {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            ElementInit::Expression(_) => SyntaxKind::Expression,
            ElementInit::Effect(_) => SyntaxKind::Effect,
            ElementInit::Event(_) => SyntaxKind::Event,
            ElementInit::Section => SyntaxKind::Section,
        }
    }
}

impl fmt::Debug for ElementInit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementInit::{:?}", self.kind())
    }
}

/// Description of a syntax element for the pattern matcher.
#[derive(Clone, Debug)]
pub struct SyntaxInfo {
    pub name: &'static str,
    /// Alternatives in matched-pattern order.
    pub patterns: &'static [&'static str],
    /// `None` for elements that are not expressions.
    pub return_type: Option<ValueType>,
    pub single: bool,
    pub init: ElementInit,
}

impl SyntaxInfo {
    pub fn kind(&self) -> SyntaxKind {
        self.init.kind()
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    ranges: Vec<RangeInfo>,
    comparators: Vec<Comparator>,
    syntaxes: Vec<SyntaxInfo>,
    syntax_index: FxHashMap<&'static str, usize>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the builtin ranges, comparators and syntax elements.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtins::register(&mut registry);
        registry
    }

    pub fn register_range(&mut self, from: ValueType, to: ValueType, function: RangeFn) {
        tracing::debug!(%from, %to, "registered range");
        self.ranges.push(RangeInfo { from, to, function });
    }

    /// Range for endpoints of type `ty`.
    pub fn range(&self, ty: ValueType) -> Option<RangeInfo> {
        self.ranges
            .iter()
            .find(|info| info.from == ty)
            .or_else(|| self.ranges.iter().find(|info| ty.is_assignable_to(info.from)))
            .copied()
    }

    pub fn register_comparator(&mut self, left: ValueType, right: ValueType, function: ComparatorFn) {
        tracing::debug!(%left, %right, "registered comparator");
        self.comparators.push(Comparator {
            left,
            right,
            function,
            flipped: false,
        });
    }

    /// Comparator for a `left` value against a `right` value.
    pub fn comparator(&self, left: ValueType, right: ValueType) -> Option<Comparator> {
        let direct = |l: ValueType, r: ValueType, exact: bool| {
            self.comparators.iter().find(|c| {
                if exact {
                    c.left == l && c.right == r
                } else {
                    l.is_assignable_to(c.left) && r.is_assignable_to(c.right)
                }
            })
        };
        let resolve = |flipped: bool| {
            let (l, r) = if flipped { (right, left) } else { (left, right) };
            direct(l, r, true)
                .or_else(|| direct(l, r, false))
                .map(|c| Comparator {
                    left,
                    right,
                    function: c.function,
                    flipped,
                })
        };
        resolve(false).or_else(|| resolve(true))
    }

    /// Register a syntax element. A later element with an already
    /// registered name is ignored.
    pub fn register_syntax(&mut self, info: SyntaxInfo) {
        if self.syntax_index.contains_key(info.name) {
            tracing::warn!(name = info.name, "syntax element registered twice, keeping the first");
            return;
        }
        tracing::debug!(name = info.name, kind = ?info.kind(), "registered syntax element");
        self.syntax_index.insert(info.name, self.syntaxes.len());
        self.syntaxes.push(info);
    }

    pub fn syntax(&self, name: &str) -> Option<&SyntaxInfo> {
        self.syntax_index.get(name).map(|&index| &self.syntaxes[index])
    }

    /// Registered syntax elements of `kind`, in registration order.
    pub fn syntaxes(&self, kind: SyntaxKind) -> impl Iterator<Item = &SyntaxInfo> {
        self.syntaxes.iter().filter(move |info| info.kind() == kind)
    }
}
