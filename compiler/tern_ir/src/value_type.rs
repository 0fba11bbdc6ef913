//! The runtime type lattice.
//!
//! Types form a small tree rooted at `Object`:
//!
//! ```text
//! Object
//! ├── Number
//! │   ├── Integer
//! │   └── Decimal
//! ├── Text
//! └── Boolean
//! ```
//!
//! Validation only ever asks two questions of it: "is `a` assignable to
//! `b`" and "what is the nearest common supertype of `a` and `b`".

use std::fmt;

/// Declared type of an expression or of a value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueType {
    Object,
    Number,
    Integer,
    Decimal,
    Text,
    Boolean,
}

impl ValueType {
    /// Direct supertype, `None` for `Object`.
    pub const fn supertype(self) -> Option<ValueType> {
        match self {
            ValueType::Object => None,
            ValueType::Number | ValueType::Text | ValueType::Boolean => Some(ValueType::Object),
            ValueType::Integer | ValueType::Decimal => Some(ValueType::Number),
        }
    }

    /// This type followed by each of its supertypes, nearest first.
    pub fn ancestors(self) -> impl Iterator<Item = ValueType> {
        std::iter::successors(Some(self), |ty| ty.supertype())
    }

    /// Whether a value of this type can stand where `target` is expected.
    pub fn is_assignable_to(self, target: ValueType) -> bool {
        self.ancestors().any(|ty| ty == target)
    }

    /// Nearest type both `a` and `b` are assignable to.
    pub fn common_supertype(a: ValueType, b: ValueType) -> ValueType {
        a.ancestors()
            .find(|ty| b.is_assignable_to(*ty))
            .unwrap_or(ValueType::Object)
    }

    /// Singular name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            ValueType::Object => "object",
            ValueType::Number => "number",
            ValueType::Integer => "integer",
            ValueType::Decimal => "decimal",
            ValueType::Text => "text",
            ValueType::Boolean => "boolean",
        }
    }

    /// Plural name used in diagnostics.
    pub const fn plural_name(self) -> &'static str {
        match self {
            ValueType::Object => "objects",
            ValueType::Number => "numbers",
            ValueType::Integer => "integers",
            ValueType::Decimal => "decimals",
            ValueType::Text => "texts",
            ValueType::Boolean => "booleans",
        }
    }

    /// Name with an indefinite article ("an integer"), or the bare plural.
    pub fn with_indefinite_article(self, plural: bool) -> String {
        if plural {
            return self.plural_name().to_string();
        }
        let name = self.name();
        let article = if name.starts_with(['a', 'e', 'i', 'o', 'u']) {
            "an"
        } else {
            "a"
        };
        format!("{article} {name}")
    }

    /// Parse a type name as written in `loop-<type>` references.
    pub fn from_name(name: &str) -> Option<ValueType> {
        let ty = match name {
            "object" | "value" => ValueType::Object,
            "number" => ValueType::Number,
            "integer" => ValueType::Integer,
            "decimal" => ValueType::Decimal,
            "text" | "string" => ValueType::Text,
            "boolean" => ValueType::Boolean,
            _ => return None,
        };
        Some(ty)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One accepted operand type for a change mode.
///
/// A plural entry accepts both single- and multi-valued operands;
/// a singular entry accepts single-valued operands only.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeSpec {
    pub ty: ValueType,
    pub plural: bool,
}

impl TypeSpec {
    pub const fn single(ty: ValueType) -> Self {
        TypeSpec { ty, plural: false }
    }

    pub const fn plural(ty: ValueType) -> Self {
        TypeSpec { ty, plural: true }
    }

    /// Whether an operand of type `ty` (multi-valued if `plural`) fits this entry.
    pub fn accepts(self, ty: ValueType, plural: bool) -> bool {
        ty.is_assignable_to(self.ty) && (self.plural || !plural)
    }

    /// Whether any entry of `specs` accepts the operand.
    pub fn any_accepts(specs: &[TypeSpec], ty: ValueType, plural: bool) -> bool {
        specs.iter().any(|spec| spec.accepts(ty, plural))
    }
}
