//! Named variables: `{name}`, local `{_name}` and list `{name::*}`.

use tern_ir::{ChangeMode, TypeSpec, Value, ValueType};

use crate::{Expression, Frame, Slot, Values};

const ANY_VALUE: &[TypeSpec] = &[TypeSpec::single(ValueType::Object)];
const ANY_VALUES: &[TypeSpec] = &[TypeSpec::plural(ValueType::Object)];
const NUMBERS: &[TypeSpec] = &[TypeSpec::plural(ValueType::Number)];
const NO_OPERAND: &[TypeSpec] = &[];

const LIST_SUFFIX: &str = "::*";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    /// The name without braces or list suffix.
    key: String,
    /// Where the value lives. Lists keep their suffix so `{x}` and
    /// `{x::*}` never share storage.
    slot_key: String,
    local: bool,
    list: bool,
}

impl Variable {
    /// Parse `{name}`, `{_name}` or `{name::*}`.
    pub fn parse(source: &str) -> Option<Self> {
        let name = source.strip_prefix('{')?.strip_suffix('}')?;
        let (key, list) = match name.strip_suffix(LIST_SUFFIX) {
            Some(base) => (base, true),
            None => (name, false),
        };
        if key.is_empty() || key.contains(['{', '}']) {
            return None;
        }
        Some(Variable {
            key: key.to_string(),
            slot_key: name.to_string(),
            local: key.starts_with('_'),
            list,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_local(&self) -> bool {
        self.local
    }

    pub fn is_list(&self) -> bool {
        self.list
    }

    fn slot(&self, frame: &Frame<'_>) -> Option<Slot> {
        if self.local {
            frame.local(&self.slot_key).cloned()
        } else {
            frame.globals().get(&self.slot_key)
        }
    }
}

impl Expression for Variable {
    fn values(&self, frame: &Frame<'_>) -> Values {
        match self.slot(frame) {
            Some(slot) if self.list => slot.values().cloned().collect(),
            Some(Slot::Single(value)) => smallvec::smallvec![value],
            Some(Slot::List(_)) | None => Values::new(),
        }
    }

    fn return_type(&self) -> ValueType {
        ValueType::Object
    }

    fn is_single(&self) -> bool {
        !self.list
    }

    fn accepts_change(&self, mode: ChangeMode) -> Option<&'static [TypeSpec]> {
        match mode {
            ChangeMode::Delete | ChangeMode::Reset => Some(NO_OPERAND),
            ChangeMode::Set | ChangeMode::Add | ChangeMode::Remove | ChangeMode::RemoveAll
                if self.list =>
            {
                Some(ANY_VALUES)
            }
            ChangeMode::Set => Some(ANY_VALUE),
            ChangeMode::Add | ChangeMode::Remove => Some(NUMBERS),
            ChangeMode::RemoveAll => None,
        }
    }

    fn change(&self, frame: &mut Frame<'_>, values: &[Value], mode: ChangeMode) {
        tracing::debug!(variable = %self.render(None, false), %mode, operands = values.len(), "change variable");
        if self.local {
            frame.change_local(&self.slot_key, self.list, values, mode);
        } else {
            frame.globals().change(&self.slot_key, self.list, values, mode);
        }
    }

    fn indexed(&self, frame: &Frame<'_>) -> Option<Vec<(String, Value)>> {
        if !self.list {
            return None;
        }
        match self.slot(frame) {
            Some(Slot::List(entries)) => Some(entries),
            Some(Slot::Single(value)) => Some(vec![("1".to_string(), value)]),
            None => Some(Vec::new()),
        }
    }

    fn render(&self, _frame: Option<&Frame<'_>>, _debug: bool) -> String {
        if self.list {
            format!("{{{}{LIST_SUFFIX}}}", self.key)
        } else {
            format!("{{{}}}", self.key)
        }
    }
}
