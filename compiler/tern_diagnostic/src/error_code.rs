//! Error codes for all runtime-core diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E3001`) with the first digit
//! indicating the phase:
//! - E3xxx: Script construction errors (element `init`)
//! - E6xxx: Runtime errors
//! - E9xxx: Internal errors

use std::fmt;

/// Error codes for all runtime-core diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Construction Errors (E3xxx)
    /// Target does not accept the change mode at all
    E3001,
    /// Change operand type is not accepted by the target
    E3002,
    /// No range is registered for the endpoint types
    E3003,
    /// Loop over a single-valued expression
    E3004,
    /// `else` / `else if` without a preceding `if`
    E3005,
    /// Loop reference that matches no enclosing loop
    E3006,
    /// Operands or parse mark do not fit the matched pattern
    E3007,

    // Runtime Errors (E6xxx)
    /// Step budget exhausted
    E6001,

    // Internal Errors (E9xxx)
    /// Internal runtime error
    E9001,
    /// Too many errors
    E9002,
}

impl ErrorCode {
    /// All error codes, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E3004,
        ErrorCode::E3005,
        ErrorCode::E3006,
        ErrorCode::E3007,
        ErrorCode::E6001,
        ErrorCode::E9001,
        ErrorCode::E9002,
    ];

    /// Get the string representation (e.g., "E3001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E3006 => "E3006",
            ErrorCode::E3007 => "E3007",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// One-line explanation, for `--explain` style lookups.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E3001 => "the target expression does not accept this kind of change",
            ErrorCode::E3002 => "the target does not accept values of the operand's type",
            ErrorCode::E3003 => "no range is registered between the endpoint types",
            ErrorCode::E3004 => "a loop needs an expression that can produce several values",
            ErrorCode::E3005 => "`else` and `else if` must follow an `if` section",
            ErrorCode::E3006 => "no enclosing loop matches this loop reference",
            ErrorCode::E3007 => "the operands do not fit the matched pattern",
            ErrorCode::E6001 => "the script exceeded its configured step budget",
            ErrorCode::E9001 => "internal runtime error",
            ErrorCode::E9002 => "too many errors",
        }
    }

    /// Whether this code belongs to the construction phase.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E3001
                | ErrorCode::E3002
                | ErrorCode::E3003
                | ErrorCode::E3004
                | ErrorCode::E3005
                | ErrorCode::E3006
                | ErrorCode::E3007
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E3001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}
