//! `pi`, `e` and `phi`.

use std::f64::consts;
use std::fmt;

use tern_diagnostic::ErrorCode;
use tern_ir::{Value, ValueType};

use crate::{expect_operands, BoxExpr, Expression, Frame, InitResult, ParseContext, Values};

/// The golden ratio, (1 + sqrt 5) / 2.
const PHI: f64 = 1.618_033_988_749_895;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MathConstant {
    Pi,
    E,
    Phi,
}

impl MathConstant {
    /// Constant selected by the parse mark of `(0¦pi|1¦e|2¦phi)`.
    pub fn from_mark(mark: u32) -> Option<Self> {
        match mark {
            0 => Some(MathConstant::Pi),
            1 => Some(MathConstant::E),
            2 => Some(MathConstant::Phi),
            _ => None,
        }
    }

    pub fn value(self) -> f64 {
        match self {
            MathConstant::Pi => consts::PI,
            MathConstant::E => consts::E,
            MathConstant::Phi => PHI,
        }
    }
}

impl fmt::Display for MathConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathConstant::Pi => f.write_str("pi"),
            MathConstant::E => f.write_str("e"),
            MathConstant::Phi => f.write_str("phi"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LitMathConstants {
    constant: MathConstant,
}

impl LitMathConstants {
    pub const PATTERNS: &'static [&'static str] = &["(0¦pi|1¦e|2¦phi)"];

    pub fn init(
        operands: Vec<BoxExpr>,
        _matched_pattern: usize,
        parse: &ParseContext<'_>,
    ) -> InitResult<Self> {
        let [] = expect_operands::<0>(operands, parse, "math constant")?;
        let mark = parse.parse_mark();
        let constant = MathConstant::from_mark(mark).ok_or_else(|| {
            parse.error(
                ErrorCode::E3007,
                format!("parse mark {mark} does not select a math constant"),
            )
        })?;
        Ok(LitMathConstants { constant })
    }

    pub fn constant(&self) -> MathConstant {
        self.constant
    }
}

impl Expression for LitMathConstants {
    fn values(&self, _frame: &Frame<'_>) -> Values {
        smallvec::smallvec![Value::Float(self.constant.value())]
    }

    fn return_type(&self) -> ValueType {
        ValueType::Decimal
    }

    fn render(&self, _frame: Option<&Frame<'_>>, _debug: bool) -> String {
        self.constant.to_string()
    }
}
