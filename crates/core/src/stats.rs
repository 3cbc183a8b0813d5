//! Prediction unit statistics collection.
//!
//! This module tracks activity counters for the branch prediction unit. It
//! provides:
//! 1. **Lookups:** Direction lookups and how many predicted taken.
//! 2. **Speculation:** Speculative history advances per thread stream.
//! 3. **Training:** Local predictor table resolutions.
//! 4. **Recovery:** Squashes and squashed-resolution history restores.
//!
//! The embedding simulator reads these to derive accuracy and recovery
//! rates; the unit itself never formats or reports them.

/// Activity counters for one branch prediction unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredictorStats {
    /// Direction lookups performed for conditional branches.
    pub lookups: u64,
    /// Lookups that predicted taken.
    pub predicted_taken: u64,
    /// Speculative global history advances.
    pub history_updates: u64,
    /// Local predictor table training events (normal resolutions).
    pub table_resolutions: u64,
    /// Branches discarded outright by a pipeline flush.
    pub squashes: u64,
    /// Resolutions that arrived squashed and restored the history register.
    pub squashed_updates: u64,
}

impl PredictorStats {
    /// Creates a zeroed statistics block.
    pub const fn new() -> Self {
        Self {
            lookups: 0,
            predicted_taken: 0,
            history_updates: 0,
            table_resolutions: 0,
            squashes: 0,
            squashed_updates: 0,
        }
    }

    /// Lookups that predicted not-taken.
    pub const fn predicted_not_taken(&self) -> u64 {
        self.lookups - self.predicted_taken
    }
}
