//! Variable storage.
//!
//! Globals live in a [`VariableStore`] shared by every trigger of a
//! runtime; locals live in the [`Frame`](crate::Frame) of one invocation.
//! Both hold [`Slot`]s and apply changes through [`Slot::apply`], so a
//! `{_list::*}` and a `{list::*}` behave the same way.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tern_ir::{ChangeMode, Value};

/// What one variable name holds.
#[derive(Clone, Debug, PartialEq)]
pub enum Slot {
    Single(Value),
    /// Ordered `(index, value)` entries of a list variable.
    List(Vec<(String, Value)>),
}

impl Slot {
    /// Values held, in order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        let (single, list) = match self {
            Slot::Single(value) => (Some(value), &[][..]),
            Slot::List(entries) => (None, entries.as_slice()),
        };
        single.into_iter().chain(list.iter().map(|(_, value)| value))
    }

    /// Apply `mode` with `operands` to the current contents of a variable.
    ///
    /// Returns the new contents; `None` means the variable is unset.
    pub fn apply(
        current: Option<Slot>,
        list: bool,
        operands: &[Value],
        mode: ChangeMode,
    ) -> Option<Slot> {
        match mode {
            ChangeMode::Delete | ChangeMode::Reset => None,
            ChangeMode::Set if list => non_empty_list(
                operands
                    .iter()
                    .enumerate()
                    .map(|(position, value)| (index_key(position), value.clone()))
                    .collect(),
            ),
            ChangeMode::Set => operands.first().cloned().map(Slot::Single),
            ChangeMode::Add if list => {
                let mut entries = into_entries(current);
                for value in operands {
                    let index = next_free_index(&entries);
                    entries.push((index.to_string(), value.clone()));
                }
                non_empty_list(entries)
            }
            ChangeMode::Remove | ChangeMode::RemoveAll if list => {
                let mut entries = into_entries(current);
                for operand in operands {
                    if mode == ChangeMode::RemoveAll {
                        entries.retain(|(_, value)| !value.loose_eq(operand));
                    } else if let Some(pos) = entries.iter().position(|(_, v)| v.loose_eq(operand)) {
                        entries.remove(pos);
                    }
                }
                non_empty_list(entries)
            }
            ChangeMode::Add | ChangeMode::Remove => {
                let negate = mode == ChangeMode::Remove;
                Some(adjust_number(current, operands, negate))
            }
            ChangeMode::RemoveAll => {
                unreachable!("remove all is never accepted by a single variable")
            }
        }
    }
}

fn into_entries(slot: Option<Slot>) -> Vec<(String, Value)> {
    match slot {
        Some(Slot::List(entries)) => entries,
        Some(Slot::Single(value)) => vec![(index_key(0), value)],
        None => Vec::new(),
    }
}

fn non_empty_list(entries: Vec<(String, Value)>) -> Option<Slot> {
    (!entries.is_empty()).then_some(Slot::List(entries))
}

/// List indices start at 1.
fn index_key(position: usize) -> String {
    (position + 1).to_string()
}

fn next_free_index(entries: &[(String, Value)]) -> u64 {
    entries
        .iter()
        .filter_map(|(index, _)| index.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Add (or subtract) the sum of `operands` to a single numeric slot.
/// An unset variable counts as 0; a non-numeric one is left alone.
fn adjust_number(current: Option<Slot>, operands: &[Value], negate: bool) -> Slot {
    let base = match current {
        None => Value::Int(0),
        Some(Slot::Single(value)) if value.as_f64().is_some() => value,
        Some(other) => {
            tracing::debug!(?other, "numeric change on a non-numeric variable ignored");
            return other;
        }
    };
    let result = operands
        .iter()
        .filter(|value| value.as_f64().is_some())
        .fold(base, |acc, operand| numeric_step(&acc, operand, negate));
    Slot::Single(result)
}

fn numeric_step(acc: &Value, operand: &Value, negate: bool) -> Value {
    if let (Some(a), Some(b)) = (acc.as_i64(), operand.as_i64()) {
        let exact = if negate { a.checked_sub(b) } else { a.checked_add(b) };
        if let Some(n) = exact {
            return Value::Int(n);
        }
    }
    let (a, b) = (acc.as_f64().unwrap_or(0.0), operand.as_f64().unwrap_or(0.0));
    Value::Float(if negate { a - b } else { a + b })
}

/// Global variables shared by every trigger of a runtime.
///
/// Each name is updated atomically; two triggers changing the same
/// variable never lose an update, though their order is unspecified.
#[derive(Debug, Default)]
pub struct VariableStore {
    vars: DashMap<String, Slot>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Slot> {
        self.vars.get(name).map(|slot| slot.value().clone())
    }

    pub fn set(&self, name: impl Into<String>, slot: Slot) {
        self.vars.insert(name.into(), slot);
    }

    pub fn remove(&self, name: &str) -> Option<Slot> {
        self.vars.remove(name).map(|(_, slot)| slot)
    }

    /// Apply a change to one variable under its entry lock.
    pub fn change(&self, name: &str, list: bool, operands: &[Value], mode: ChangeMode) {
        match self.vars.entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                match Slot::apply(Some(entry.get().clone()), list, operands, mode) {
                    Some(next) => {
                        entry.insert(next);
                    }
                    None => {
                        entry.remove();
                    }
                }
            }
            Entry::Vacant(entry) => {
                if let Some(next) = Slot::apply(None, list, operands, mode) {
                    entry.insert(next);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
