//! Tern IR - plain data shared by every part of the Tern runtime.
//!
//! This crate contains the types that cross component boundaries:
//! - `ValueType` and `TypeSpec`: the type lattice used for validation
//! - `Value`: the tagged union of runtime values
//! - `ChangeMode`: the kinds of mutation an expression may accept
//! - `Relation`: the result of comparing two values
//! - `Span`: source locations for diagnostics
//! - `StmtId` / `LoopId`: arena indices for the statement graph
//!
//! Nothing here evaluates anything. Behaviour lives in `tern_eval`.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod change_mode;
mod ids;
mod relation;
mod span;
mod value;
mod value_type;

pub use change_mode::ChangeMode;
pub use ids::{LoopId, StmtId};
pub use relation::Relation;
pub use span::Span;
pub use value::Value;
pub use value_type::{TypeSpec, ValueType};
