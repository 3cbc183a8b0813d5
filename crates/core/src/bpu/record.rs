//! Per-branch prediction records.
//!
//! Every in-flight branch owns exactly one record: a snapshot of the state
//! the predictor needs to later resolve or roll back that branch. Records
//! are deliberately move-only (no `Clone`, no `Copy`): `update` or `squash`
//! consumes the record by value, so the compiler enforces that each branch
//! is retired or squashed exactly once and never both.

/// Snapshot of per-branch speculative predictor state.
///
/// Created by `lookup` for conditional branches, or by `update_histories`
/// for unconditional branches (which bypass lookup and must never train the
/// local predictor table).
#[derive(Debug)]
pub struct PredictionRecord {
    /// Global history value observed when the record was created.
    history: u32,
    /// Local counter value read at lookup time (informational).
    counter: u16,
    /// Whether resolution may train the local predictor table.
    update_eligible: bool,
}

impl PredictionRecord {
    /// Builds a record for a conditional branch predicted against the table.
    pub(crate) const fn predicted(history: u32, counter: u16) -> Self {
        Self {
            history,
            counter,
            update_eligible: true,
        }
    }

    /// Builds a record for a branch that bypassed table lookup.
    ///
    /// Unconditional branches still need squash and resolution bookkeeping
    /// for the history register, but must leave the table untouched.
    pub(crate) const fn bypassed(history: u32) -> Self {
        Self {
            history,
            counter: 0,
            update_eligible: false,
        }
    }

    /// Returns the global history value observed at creation time.
    #[inline(always)]
    pub const fn history(&self) -> u32 {
        self.history
    }

    /// Returns the local counter value read at lookup time.
    #[inline(always)]
    pub const fn counter(&self) -> u16 {
        self.counter
    }

    /// Returns true if resolution may train the local predictor table.
    #[inline(always)]
    pub const fn updates_table(&self) -> bool {
        self.update_eligible
    }
}
