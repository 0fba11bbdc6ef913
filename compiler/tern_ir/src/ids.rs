//! Arena indices for the statement graph.

use std::fmt;

/// Index of a statement node in a trigger's arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct StmtId(u32);

impl StmtId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        StmtId(index)
    }

    /// Position of the node in its arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StmtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StmtId({})", self.0)
    }
}

/// Identity of one loop section within a script.
///
/// Assigned by the loader when it opens a loop, so expressions inside the
/// body (`loop-value`, `loop-index`) can name the loop before the statement
/// graph exists. Per-run iteration state is keyed by this id.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct LoopId(u32);

impl LoopId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        LoopId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for LoopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LoopId({})", self.0)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{LoopId, StmtId};
    crate::static_assert_size!(StmtId, 4);
    crate::static_assert_size!(LoopId, 4);
}
