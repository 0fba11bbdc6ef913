//! `loop-value`, `loop-index` and `loop-<type>`.

use tern_diagnostic::ErrorCode;
use tern_ir::{Value, ValueType};

use crate::{
    expect_operands, BoxExpr, Expression, Frame, InitResult, LoopRef, ParseContext, Values,
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Reference {
    Value,
    Index,
    Typed(ValueType),
}

/// The current element of an enclosing loop.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ExprLoopValue {
    target: LoopRef,
    reference: Reference,
}

impl ExprLoopValue {
    pub const PATTERNS: &'static [&'static str] =
        &["[the] loop-value", "[the] loop-index", "[the] loop-<.+>"];

    pub fn init(
        operands: Vec<BoxExpr>,
        matched_pattern: usize,
        parse: &ParseContext<'_>,
    ) -> InitResult<Self> {
        let [] = expect_operands::<0>(operands, parse, "loop value")?;
        let reference = match matched_pattern {
            0 => Reference::Value,
            1 => Reference::Index,
            _ => {
                let name = parse.matches().first().map_or("", String::as_str);
                let ty = ValueType::from_name(name).ok_or_else(|| {
                    parse.error(ErrorCode::E3007, format!("'{name}' is not a type"))
                })?;
                Reference::Typed(ty)
            }
        };

        // Innermost loop first.
        let mut loops = parse.loops().iter().rev();
        let target = match reference {
            Reference::Value | Reference::Index => loops.next(),
            Reference::Typed(ty) => loops.find(|l| {
                l.looped_type.is_assignable_to(ty) || ty.is_assignable_to(l.looped_type)
            }),
        };
        let Some(&target) = target else {
            return Err(parse.error(
                ErrorCode::E3006,
                format!("There's no loop that matches '{}'", render(reference)),
            ));
        };
        Ok(ExprLoopValue { target, reference })
    }

    pub fn target(&self) -> LoopRef {
        self.target
    }
}

fn render(reference: Reference) -> String {
    match reference {
        Reference::Value => "loop-value".to_string(),
        Reference::Index => "loop-index".to_string(),
        Reference::Typed(ty) => format!("loop-{ty}"),
    }
}

impl Expression for ExprLoopValue {
    fn values(&self, frame: &Frame<'_>) -> Values {
        let id = self.target.id;
        let value = match self.reference {
            Reference::Value => frame.loop_value(id).cloned(),
            Reference::Index => frame.loop_index(id).map(Value::text),
            Reference::Typed(ty) => frame
                .loop_value(id)
                .filter(|value| value.value_type().is_assignable_to(ty))
                .cloned(),
        };
        value.into_iter().collect()
    }

    fn return_type(&self) -> ValueType {
        match self.reference {
            Reference::Value => self.target.looped_type,
            Reference::Index => ValueType::Text,
            Reference::Typed(ty) => ty,
        }
    }

    fn render(&self, frame: Option<&Frame<'_>>, debug: bool) -> String {
        let name = render(self.reference);
        match frame.filter(|_| debug).and_then(|f| self.single(f)) {
            Some(value) => format!("{name} ({value})"),
            None => name,
        }
    }
}
