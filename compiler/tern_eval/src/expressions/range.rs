//! `range from X to Y`: every value between two endpoints, in order.

use tern_diagnostic::ErrorCode;
use tern_ir::{Relation, ValueType};

use crate::{
    ensure_sufficient_stack, expect_operands, BoxExpr, Comparator, Expression, Frame, InitResult,
    ParseContext, RangeInfo, Values,
};

/// The values between two endpoints, inclusive.
///
/// The generator comes from the registry for the endpoints' common type.
/// When a comparator for the endpoint types says `from > to`, the range is
/// generated from `to` to `from` and reversed, so `5 to 1` yields
/// `5, 4, 3, 2, 1`.
#[derive(Debug)]
pub struct ExprRange {
    from: BoxExpr,
    to: BoxExpr,
    range: RangeInfo,
    comparator: Option<Comparator>,
}

impl ExprRange {
    pub const PATTERNS: &'static [&'static str] = &["[the] range from %object% to %object%"];

    pub fn init(
        operands: Vec<BoxExpr>,
        _matched_pattern: usize,
        parse: &ParseContext<'_>,
    ) -> InitResult<Self> {
        let [from, to] = expect_operands::<2>(operands, parse, "range")?;
        let (from_type, to_type) = (from.return_type(), to.return_type());
        let ty = ValueType::common_supertype(from_type, to_type);

        let Some(range) = parse.registry().range(ty) else {
            let debug = parse.is_debug();
            return Err(parse.error(
                ErrorCode::E3003,
                format!(
                    "Cannot get a range between {} and {}",
                    from.render(None, debug),
                    to.render(None, debug)
                ),
            ));
        };
        let comparator = parse.registry().comparator(from_type, to_type);
        tracing::debug!(%ty, ?range, ?comparator, "resolved range");

        Ok(ExprRange {
            from,
            to,
            range,
            comparator,
        })
    }
}

impl Expression for ExprRange {
    fn values(&self, frame: &Frame<'_>) -> Values {
        ensure_sufficient_stack(|| {
            let (Some(from), Some(to)) = (self.from.single(frame), self.to.single(frame)) else {
                return Values::new();
            };
            let descending = self
                .comparator
                .is_some_and(|c| c.compare(&from, &to) == Relation::Greater);
            if descending {
                let mut values = self.range.apply(&to, &from);
                values.reverse();
                Values::from_vec(values)
            } else {
                Values::from_vec(self.range.apply(&from, &to))
            }
        })
    }

    fn return_type(&self) -> ValueType {
        self.range.to
    }

    fn is_single(&self) -> bool {
        false
    }

    fn render(&self, frame: Option<&Frame<'_>>, debug: bool) -> String {
        ensure_sufficient_stack(|| {
            format!(
                "range from {} to {}",
                self.from.render(frame, debug),
                self.to.render(frame, debug)
            )
        })
    }
}
