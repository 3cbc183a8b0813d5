//! Hardware thread identity.
//!
//! The predictor keeps one global history register per simulated hardware
//! thread. `ThreadId` is a strong type so a thread index is never confused
//! with a table row or a counter value at a call site.

/// Identifies one simulated hardware thread (one logical instruction stream).
///
/// Thread IDs index per-thread predictor state. They model logically
/// independent instruction streams interleaved by the simulator's scheduling
/// loop, not concurrent execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ThreadId(pub usize);

impl ThreadId {
    /// Creates a new thread ID from a raw index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index value.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for ThreadId {
    /// Converts a raw index into a `ThreadId`.
    fn from(index: usize) -> Self {
        Self(index)
    }
}
