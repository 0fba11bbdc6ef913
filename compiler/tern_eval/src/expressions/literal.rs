//! Constant values matched directly from source text.

use tern_ir::{Value, ValueType};

use crate::{Expression, Frame, Values};

#[derive(Clone, Debug, PartialEq)]
pub struct Literal {
    values: Vec<Value>,
    ty: ValueType,
}

impl Literal {
    /// A literal list. Its type is the nearest common type of the values.
    pub fn new(values: Vec<Value>) -> Self {
        let ty = values
            .iter()
            .map(Value::value_type)
            .reduce(ValueType::common_supertype)
            .unwrap_or(ValueType::Object);
        Literal { values, ty }
    }

    /// A literal holding one value.
    pub fn of(value: impl Into<Value>) -> Self {
        Self::new(vec![value.into()])
    }
}

impl Expression for Literal {
    fn values(&self, _frame: &Frame<'_>) -> Values {
        self.values.iter().cloned().collect()
    }

    fn return_type(&self) -> ValueType {
        self.ty
    }

    fn is_single(&self) -> bool {
        self.values.len() == 1
    }

    fn render(&self, _frame: Option<&Frame<'_>>, _debug: bool) -> String {
        let rendered: Vec<String> = self.values.iter().map(render_value).collect();
        match rendered.as_slice() {
            [] => "nothing".to_string(),
            [only] => only.clone(),
            [init @ .., last] => format!("{} and {last}", init.join(", ")),
        }
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Text(text) => format!("\"{text}\""),
        other => other.to_string(),
    }
}
