//! Builtin ranges, comparators and syntax elements.

use tern_ir::{Relation, Value, ValueType};

use super::{ElementInit, Registry, SyntaxInfo};
use crate::{
    BoxExpr, EffChange, Effect, ExprLoopValue, ExprRange, InitResult, LitMathConstants,
    ParseContext, ScriptLoadEvent,
};

pub(super) fn register(registry: &mut Registry) {
    registry.register_range(ValueType::Integer, ValueType::Integer, integer_range);
    registry.register_range(ValueType::Text, ValueType::Text, character_range);

    registry.register_comparator(ValueType::Integer, ValueType::Integer, compare_integers);
    registry.register_comparator(ValueType::Number, ValueType::Number, compare_numbers);
    registry.register_comparator(ValueType::Text, ValueType::Text, compare_texts);
    registry.register_comparator(ValueType::Boolean, ValueType::Boolean, compare_booleans);

    registry.register_syntax(SyntaxInfo {
        name: "change",
        patterns: EffChange::PATTERNS,
        return_type: None,
        single: true,
        init: ElementInit::Effect(init_change),
    });
    registry.register_syntax(SyntaxInfo {
        name: "range",
        patterns: ExprRange::PATTERNS,
        return_type: Some(ValueType::Object),
        single: false,
        init: ElementInit::Expression(init_range),
    });
    registry.register_syntax(SyntaxInfo {
        name: "math constant",
        patterns: LitMathConstants::PATTERNS,
        return_type: Some(ValueType::Decimal),
        single: true,
        init: ElementInit::Expression(init_math_constant),
    });
    registry.register_syntax(SyntaxInfo {
        name: "loop value",
        patterns: ExprLoopValue::PATTERNS,
        return_type: Some(ValueType::Object),
        single: true,
        init: ElementInit::Expression(init_loop_value),
    });
    registry.register_syntax(SyntaxInfo {
        name: "loop",
        patterns: &["loop %objects%"],
        return_type: None,
        single: true,
        init: ElementInit::Section,
    });
    registry.register_syntax(SyntaxInfo {
        name: "conditional",
        patterns: &["if %boolean%", "else if %boolean%", "else"],
        return_type: None,
        single: true,
        init: ElementInit::Section,
    });
    registry.register_syntax(SyntaxInfo {
        name: "script load",
        patterns: ScriptLoadEvent::PATTERNS,
        return_type: None,
        single: true,
        init: ElementInit::Event(ScriptLoadEvent::init),
    });
}

fn init_change(
    operands: Vec<BoxExpr>,
    matched_pattern: usize,
    parse: &ParseContext<'_>,
) -> InitResult<Box<dyn Effect>> {
    Ok(Box::new(EffChange::init(operands, matched_pattern, parse)?))
}

fn init_range(
    operands: Vec<BoxExpr>,
    matched_pattern: usize,
    parse: &ParseContext<'_>,
) -> InitResult<BoxExpr> {
    Ok(Box::new(ExprRange::init(operands, matched_pattern, parse)?))
}

fn init_math_constant(
    operands: Vec<BoxExpr>,
    matched_pattern: usize,
    parse: &ParseContext<'_>,
) -> InitResult<BoxExpr> {
    Ok(Box::new(LitMathConstants::init(operands, matched_pattern, parse)?))
}

fn init_loop_value(
    operands: Vec<BoxExpr>,
    matched_pattern: usize,
    parse: &ParseContext<'_>,
) -> InitResult<BoxExpr> {
    Ok(Box::new(ExprLoopValue::init(operands, matched_pattern, parse)?))
}

/// Largest number of values a single integer range may produce.
pub(crate) const MAX_INTEGER_RANGE: u64 = 1 << 20;

/// Every integer from `from` to `to`, both included; empty when `from > to`.
///
/// Ranges of more than [`MAX_INTEGER_RANGE`] values produce nothing.
pub(crate) fn integer_range(from: &Value, to: &Value) -> Vec<Value> {
    let (Some(from), Some(to)) = (from.as_i64(), to.as_i64()) else {
        return Vec::new();
    };
    if from > to {
        return Vec::new();
    }
    let span = to.checked_sub(from).and_then(|d| u64::try_from(d).ok());
    match span {
        Some(span) if span < MAX_INTEGER_RANGE => (from..=to).map(Value::Int).collect(),
        _ => {
            tracing::warn!(from, to, limit = MAX_INTEGER_RANGE, "integer range too large");
            Vec::new()
        }
    }
}

/// Every character from `from` to `to`, both included. Both endpoints must
/// be one-character texts.
pub(crate) fn character_range(from: &Value, to: &Value) -> Vec<Value> {
    let (Some(from), Some(to)) = (single_char(from), single_char(to)) else {
        return Vec::new();
    };
    (from..=to).map(|c| Value::text(c.encode_utf8(&mut [0; 4]))).collect()
}

fn single_char(value: &Value) -> Option<char> {
    let mut chars = value.as_str()?.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

fn compare_integers(a: &Value, b: &Value) -> Relation {
    match (a.as_i64(), b.as_i64()) {
        (Some(a), Some(b)) => Relation::from_ordering(a.cmp(&b)),
        _ => Relation::Unordered,
    }
}

fn compare_numbers(a: &Value, b: &Value) -> Relation {
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => Relation::from_partial(a.partial_cmp(&b)),
        _ => Relation::Unordered,
    }
}

fn compare_texts(a: &Value, b: &Value) -> Relation {
    match (a.as_str(), b.as_str()) {
        (Some(a), Some(b)) => Relation::from_ordering(a.cmp(b)),
        _ => Relation::Unordered,
    }
}

fn compare_booleans(a: &Value, b: &Value) -> Relation {
    match (a.as_bool(), b.as_bool()) {
        (Some(a), Some(b)) => Relation::from_ordering(a.cmp(&b)),
        _ => Relation::Unordered,
    }
}
