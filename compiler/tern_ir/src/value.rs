//! Runtime values.
//!
//! Values crossing the expression, change and range interfaces are a closed
//! tagged union. Dispatch code matches on it exhaustively instead of
//! inspecting types at runtime.
//!
//! # Thread Safety
//!
//! Text is stored as `Arc<str>`, so values are cheap to clone and can be
//! shared with the global variable store across triggers.

use std::fmt;
use std::sync::Arc;

use crate::ValueType;

/// A single runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Whole number.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Text. A one-character text doubles as a character.
    Text(Arc<str>),
}

impl Value {
    /// Create a text value.
    pub fn text(s: impl AsRef<str>) -> Self {
        Value::Text(Arc::from(s.as_ref()))
    }

    /// The most specific type of this value.
    pub const fn value_type(&self) -> ValueType {
        match self {
            Value::Int(_) => ValueType::Integer,
            Value::Float(_) => ValueType::Decimal,
            Value::Bool(_) => ValueType::Boolean,
            Value::Text(_) => ValueType::Text,
        }
    }

    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view of the value; integers widen to `f64`.
    #[expect(
        clippy::cast_precision_loss,
        reason = "integers above 2^53 lose precision, as in any numeric widening"
    )]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Equality used by removal: numbers compare by numeric value,
    /// everything else structurally.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                self.as_f64() == other.as_f64()
            }
            _ => self == other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Value;
    crate::static_assert_size!(Value, 24);
}
