//! Static Branch Predictor.
//!
//! Implements a simple "Always Not Taken" prediction policy for conditional
//! branches. It keeps no direction history and no counter table, but still
//! honors the record lifecycle so the pipeline can drive it through the same
//! four-operation contract as any other predictor.

use super::DirectionPredictor;
use super::record::PredictionRecord;
use crate::common::ThreadId;
use crate::stats::PredictorStats;

/// Static Branch Predictor structure.
#[derive(Debug, Default)]
pub struct StaticPredictor {
    /// Activity counters.
    stats: PredictorStats,
}

impl StaticPredictor {
    /// Creates a new Static Predictor.
    pub const fn new() -> Self {
        Self {
            stats: PredictorStats::new(),
        }
    }

    /// Returns the unit's activity counters.
    #[inline(always)]
    pub const fn stats(&self) -> &PredictorStats {
        &self.stats
    }
}

impl DirectionPredictor for StaticPredictor {
    /// Always predicts not-taken.
    ///
    /// The record carries no usable snapshot; it exists so the caller's
    /// retirement bookkeeping is identical across predictor kinds.
    fn lookup(&mut self, _tid: ThreadId, _pc: u64) -> (bool, PredictionRecord) {
        self.stats.lookups += 1;
        (false, PredictionRecord::bypassed(0))
    }

    /// Issues a record for unconditional branches; keeps no history.
    fn update_histories(
        &mut self,
        _tid: ThreadId,
        pc: u64,
        uncond: bool,
        _taken: bool,
        _target: u64,
        record: &mut Option<PredictionRecord>,
    ) {
        assert!(
            uncond || record.is_some(),
            "conditional branch at {pc:#x} reached update_histories without a lookup record"
        );
        if uncond {
            *record = Some(PredictionRecord::bypassed(0));
        }
        self.stats.history_updates += 1;
    }

    /// Consumes the record; maintains no trainable state.
    fn update(
        &mut self,
        _tid: ThreadId,
        _pc: u64,
        _taken: bool,
        _record: PredictionRecord,
        was_squashed: bool,
        _target: u64,
    ) {
        if was_squashed {
            self.stats.squashed_updates += 1;
        }
    }

    /// Consumes the record; nothing to roll back.
    fn squash(&mut self, _tid: ThreadId, _record: PredictionRecord) {
        self.stats.squashes += 1;
    }
}
