//! Three-way comparison result with an "unordered" outcome.

use std::cmp::Ordering;
use std::fmt;

/// Result of comparing two values with a registered comparator.
///
/// Unlike `std::cmp::Ordering`, a comparator may answer `Unordered`
/// for values it cannot place relative to each other (e.g. NaN).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Relation {
    Less,
    Equal,
    Greater,
    Unordered,
}

impl Relation {
    /// Convert a total ordering.
    #[inline]
    pub const fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Relation::Less,
            Ordering::Equal => Relation::Equal,
            Ordering::Greater => Relation::Greater,
        }
    }

    /// Convert a partial ordering; `None` becomes `Unordered`.
    #[inline]
    pub const fn from_partial(ord: Option<Ordering>) -> Self {
        match ord {
            Some(ord) => Self::from_ordering(ord),
            None => Relation::Unordered,
        }
    }

    /// The relation seen from the other operand.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Relation::Less => Relation::Greater,
            Relation::Greater => Relation::Less,
            other => other,
        }
    }

    /// Whether this relation satisfies `other`.
    ///
    /// Exact match only; `Unordered` satisfies nothing but itself.
    #[inline]
    pub fn is(self, other: Relation) -> bool {
        self == other
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Relation::Less => "less",
            Relation::Equal => "equal",
            Relation::Greater => "greater",
            Relation::Unordered => "unordered",
        };
        f.write_str(s)
    }
}
