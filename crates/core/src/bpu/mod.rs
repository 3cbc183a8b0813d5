//! Branch prediction unit (BPU) implementations.
//!
//! This module contains the direction prediction algorithms and their
//! building blocks: the four-operation predictor contract, the per-branch
//! prediction record, saturating counters, per-thread global history
//! registers, the local predictor table, and the predictor variants
//! (static and two-level correlating).

pub use self::predictor::DirectionPredictor;
pub use self::record::PredictionRecord;

/// Two-level correlating predictor.
pub mod correlating;

/// Saturating counter storage element.
pub mod counter;

/// Per-thread global history registers.
pub mod history;

/// Direction predictor trait and common functionality.
pub mod predictor;

/// Per-branch speculative state records.
pub mod record;

/// Static branch predictor (always not-taken).
pub mod static_bp;

/// Local predictor counter table.
pub mod table;

use self::correlating::CorrelatingPredictor;
use self::static_bp::StaticPredictor;
use crate::common::{ConfigError, ThreadId};
use crate::config::{BpuConfig, PredictorKind};

/// Enum wrapper for static dispatch of direction predictors.
/// This avoids vtable lookups in the critical fetch loop.
#[derive(Debug)]
pub enum BranchPredictorUnit {
    /// Always-not-taken baseline.
    Static(StaticPredictor),
    /// Two-level correlating predictor.
    Correlating(CorrelatingPredictor),
}

impl BranchPredictorUnit {
    /// Creates a new prediction unit based on configuration.
    ///
    /// Selects the configured algorithm and builds it with the unit-wide
    /// thread count and instruction alignment shift.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation; no
    /// unit is constructed in that case.
    pub fn new(config: &BpuConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(match config.predictor {
            PredictorKind::Static => Self::Static(StaticPredictor::new()),
            PredictorKind::Correlating => Self::Correlating(CorrelatingPredictor::new(
                &config.correlating,
                config.num_threads,
                config.inst_shift,
            )?),
        })
    }
}

impl DirectionPredictor for BranchPredictorUnit {
    /// Predicts whether the conditional branch at `pc` will be taken.
    ///
    /// Returns the prediction together with the branch's fresh record.
    #[inline(always)]
    fn lookup(&mut self, tid: ThreadId, pc: u64) -> (bool, PredictionRecord) {
        match self {
            Self::Static(bp) => bp.lookup(tid, pc),
            Self::Correlating(bp) => bp.lookup(tid, pc),
        }
    }

    /// Advances the thread's global history with a speculative outcome.
    ///
    /// Issues a record for unconditional branches, which bypass lookup.
    #[inline(always)]
    fn update_histories(
        &mut self,
        tid: ThreadId,
        pc: u64,
        uncond: bool,
        taken: bool,
        target: u64,
        record: &mut Option<PredictionRecord>,
    ) {
        match self {
            Self::Static(bp) => bp.update_histories(tid, pc, uncond, taken, target, record),
            Self::Correlating(bp) => bp.update_histories(tid, pc, uncond, taken, target, record),
        }
    }

    /// Resolves the branch, consuming its record.
    ///
    /// Trains the predictor on a normal resolution, or restores the history
    /// register when the resolution arrives squashed.
    #[inline(always)]
    fn update(
        &mut self,
        tid: ThreadId,
        pc: u64,
        taken: bool,
        record: PredictionRecord,
        was_squashed: bool,
        target: u64,
    ) {
        match self {
            Self::Static(bp) => bp.update(tid, pc, taken, record, was_squashed, target),
            Self::Correlating(bp) => bp.update(tid, pc, taken, record, was_squashed, target),
        }
    }

    /// Discards a speculatively issued branch, consuming its record.
    #[inline(always)]
    fn squash(&mut self, tid: ThreadId, record: PredictionRecord) {
        match self {
            Self::Static(bp) => bp.squash(tid, record),
            Self::Correlating(bp) => bp.squash(tid, record),
        }
    }
}
