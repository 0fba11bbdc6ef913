//! Mutation kinds accepted by changeable expressions.

use std::fmt;

/// The kind of mutation a change effect applies to its target.
///
/// Each target declares, per mode, which operand types it accepts
/// (see `Expression::accepts_change` in `tern_eval`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ChangeMode {
    Set,
    Add,
    Remove,
    RemoveAll,
    Delete,
    Reset,
}

impl ChangeMode {
    /// Every mode, in declaration order.
    pub const ALL: [ChangeMode; 6] = [
        ChangeMode::Set,
        ChangeMode::Add,
        ChangeMode::Remove,
        ChangeMode::RemoveAll,
        ChangeMode::Delete,
        ChangeMode::Reset,
    ];

    /// Whether this mode is applied with operand values.
    ///
    /// `Delete` and `Reset` always receive an empty value slice.
    #[inline]
    pub const fn takes_operand(self) -> bool {
        !matches!(self, ChangeMode::Delete | ChangeMode::Reset)
    }

    /// Lower-case keyword for this mode.
    pub const fn name(self) -> &'static str {
        match self {
            ChangeMode::Set => "set",
            ChangeMode::Add => "add",
            ChangeMode::Remove => "remove",
            ChangeMode::RemoveAll => "remove all",
            ChangeMode::Delete => "delete",
            ChangeMode::Reset => "reset",
        }
    }
}

impl fmt::Display for ChangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
