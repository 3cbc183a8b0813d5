//! Branch Direction Predictor Interface.
//!
//! This module defines the `DirectionPredictor` trait that all direction
//! prediction implementations must adhere to. The contract covers the three
//! temporal phases of a branch's life in a speculative pipeline:
//! 1. **Prediction:** `lookup` guesses the direction and issues a record.
//! 2. **Speculative history:** `update_histories` advances the thread's
//!    global history before the branch resolves.
//! 3. **Retirement:** exactly one of `update` (resolution, possibly flagged
//!    as squashed) or `squash` (outright pipeline flush) consumes the record.
//!
//! The simulator invokes these operations strictly sequentially from its
//! scheduling loop; "per hardware thread" state models independent
//! instruction streams, not concurrency.

use super::record::PredictionRecord;
use crate::common::ThreadId;

/// Trait for branch direction prediction algorithms.
///
/// Implementations own all of their mutable state; callers interact only
/// through these four operations and the records they exchange.
pub trait DirectionPredictor {
    /// Predicts whether the conditional branch at `pc` will be taken.
    ///
    /// Reads the thread's global history and the predictor state without
    /// mutating either (statistics counters may advance), and returns the
    /// prediction together with a fresh record for the branch instance. The
    /// caller owns the record and must eventually pass it to exactly one of
    /// [`update`](Self::update) or [`squash`](Self::squash).
    fn lookup(&mut self, tid: ThreadId, pc: u64) -> (bool, PredictionRecord);

    /// Advances the thread's global history with a speculative outcome.
    ///
    /// Called once per branch as soon as its direction is known or assumed,
    /// ahead of resolution. Unconditional branches bypass
    /// [`lookup`](Self::lookup) entirely, so for `uncond` this also places a
    /// fresh update-ineligible record into `record` for later bookkeeping.
    ///
    /// # Panics
    ///
    /// A conditional branch reaching this call without a record from
    /// `lookup` is a caller contract violation and is asserted.
    fn update_histories(
        &mut self,
        tid: ThreadId,
        pc: u64,
        uncond: bool,
        taken: bool,
        target: u64,
        record: &mut Option<PredictionRecord>,
    );

    /// Resolves the branch, consuming its record.
    ///
    /// With `was_squashed` set this is a recovery path: the thread's history
    /// register is rolled back to the record's value and the real outcome is
    /// replayed, and the local predictor state is left untouched. Otherwise
    /// the outcome trains the predictor (if the record is update-eligible);
    /// the history register was already advanced by
    /// [`update_histories`](Self::update_histories) and is not touched.
    fn update(
        &mut self,
        tid: ThreadId,
        pc: u64,
        taken: bool,
        record: PredictionRecord,
        was_squashed: bool,
        target: u64,
    );

    /// Discards a speculatively issued branch, consuming its record.
    ///
    /// Rolls the thread's history register back to the record's value with
    /// no replay; the branch's outcome is irrelevant here. The local
    /// predictor state is never touched.
    fn squash(&mut self, tid: ThreadId, record: PredictionRecord);
}
