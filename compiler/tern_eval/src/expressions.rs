//! Builtin expressions.

mod literal;
mod loop_value;
mod math_constants;
mod range;
mod variable;

pub use literal::Literal;
pub use loop_value::ExprLoopValue;
pub use math_constants::{LitMathConstants, MathConstant};
pub use range::ExprRange;
pub use variable::Variable;
