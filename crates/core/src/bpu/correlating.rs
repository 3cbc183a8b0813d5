//! Two-Level Correlating Branch Predictor.
//!
//! An (m, n) correlating predictor: the branch address hashes to a row of
//! `n`-bit saturating counters, and the thread's global branch history
//! selects a counter within the row. The same static branch is therefore
//! predicted differently in different execution contexts.
//!
//! The predictor reconciles speculative history updates with rollback:
//! every in-flight branch carries a [`PredictionRecord`] snapshot, and the
//! history register can be advanced speculatively, restored-with-replay on a
//! squashed resolution, or rolled back outright on a pipeline flush, while
//! the shared counter table is only ever trained by normal resolutions.

use tracing::trace;

use super::DirectionPredictor;
use super::history::GlobalHistory;
use super::record::PredictionRecord;
use super::table::LocalPredictorTable;
use crate::common::{ConfigError, ThreadId};
use crate::config::CorrelatingConfig;
use crate::stats::PredictorStats;

/// Correlating Predictor structure.
#[derive(Debug)]
pub struct CorrelatingPredictor {
    /// Shared table of local predictors, trained at resolution time.
    table: LocalPredictorTable,
    /// One global history register per hardware thread.
    history: GlobalHistory,
    /// Taken threshold, the counter midpoint `2^(n - 1) - 1`.
    threshold: u16,
    /// Activity counters.
    stats: PredictorStats,
}

impl CorrelatingPredictor {
    /// Creates a new Correlating Predictor from validated parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the parameters fail validation or no
    /// hardware threads were requested; no predictor is constructed in that
    /// case.
    pub fn new(
        config: &CorrelatingConfig,
        num_threads: usize,
        inst_shift: u32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if num_threads == 0 {
            return Err(ConfigError::NoHardwareThreads);
        }
        Ok(Self {
            table: LocalPredictorTable::new(
                config.n_local_predictors,
                config.m,
                config.n,
                inst_shift,
            ),
            history: GlobalHistory::new(num_threads, config.m),
            threshold: (((1u32 << (config.n - 1)) - 1) as u16),
            stats: PredictorStats::new(),
        })
    }

    /// Returns the thread's current global history value.
    #[inline(always)]
    pub fn global_history(&self, tid: ThreadId) -> u32 {
        self.history.snapshot(tid)
    }

    /// Returns the history register width mask, `2^(m - 1) - 1`.
    #[inline(always)]
    pub const fn history_mask(&self) -> u32 {
        self.history.mask()
    }

    /// Reads the counter a lookup at `pc` would consult under `history`.
    ///
    /// Read-only observability hook for the embedding simulator and tests.
    #[inline(always)]
    pub fn counter_value(&self, pc: u64, history: u32) -> u16 {
        self.table.lookup(pc, history)
    }

    /// Returns the taken threshold, the counter midpoint `2^(n - 1) - 1`.
    #[inline(always)]
    pub const fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Returns the unit's activity counters.
    #[inline(always)]
    pub const fn stats(&self) -> &PredictorStats {
        &self.stats
    }
}

impl DirectionPredictor for CorrelatingPredictor {
    /// Predicts the branch direction from the counter selected by the
    /// hashed address and the thread's current global history.
    ///
    /// Predicts taken iff the counter is strictly above the midpoint
    /// threshold. No predictor state is mutated; the returned record
    /// snapshots the history and counter values for later resolution or
    /// rollback.
    fn lookup(&mut self, tid: ThreadId, pc: u64) -> (bool, PredictionRecord) {
        let history = self.history.snapshot(tid);
        let counter = self.table.lookup(pc, history);
        let prediction = counter > self.threshold;

        self.stats.lookups += 1;
        if prediction {
            self.stats.predicted_taken += 1;
        }
        trace!(
            tid = tid.index(),
            pc = format_args!("{pc:#x}"),
            history,
            counter,
            prediction,
            "bpu lookup"
        );

        (prediction, PredictionRecord::predicted(history, counter))
    }

    /// Advances the thread's global history with the speculative outcome.
    ///
    /// Unconditional branches bypass lookup, so they receive a fresh
    /// update-ineligible record here; the table must never be trained by a
    /// branch it never predicted.
    fn update_histories(
        &mut self,
        tid: ThreadId,
        pc: u64,
        uncond: bool,
        taken: bool,
        target: u64,
        record: &mut Option<PredictionRecord>,
    ) {
        assert!(
            uncond || record.is_some(),
            "conditional branch at {pc:#x} reached update_histories without a lookup record"
        );

        if uncond {
            *record = Some(PredictionRecord::bypassed(self.history.snapshot(tid)));
        }

        self.history.advance(tid, taken);
        self.stats.history_updates += 1;
        trace!(
            tid = tid.index(),
            pc = format_args!("{pc:#x}"),
            target = format_args!("{target:#x}"),
            uncond,
            taken,
            "bpu speculative history update"
        );
    }

    /// Resolves the branch, consuming its record.
    ///
    /// A squashed resolution only repairs the history register: roll back to
    /// the record's pre-branch value and replay the real outcome. The table
    /// is deliberately left untouched on that path so speculative-path
    /// behavior never trains it. A normal resolution trains the counter the
    /// branch was predicted against (same address hash, same history value)
    /// and leaves the history register alone — it already advanced
    /// speculatively.
    fn update(
        &mut self,
        tid: ThreadId,
        pc: u64,
        taken: bool,
        record: PredictionRecord,
        was_squashed: bool,
        target: u64,
    ) {
        if was_squashed {
            self.history.restore(tid, record.history(), taken);
            self.stats.squashed_updates += 1;
            trace!(
                tid = tid.index(),
                pc = format_args!("{pc:#x}"),
                target = format_args!("{target:#x}"),
                taken,
                restored = record.history(),
                "bpu squashed resolution, history restored"
            );
            return;
        }

        if record.updates_table() {
            self.table.resolve(pc, record.history(), taken);
            self.stats.table_resolutions += 1;
        }
        trace!(
            tid = tid.index(),
            pc = format_args!("{pc:#x}"),
            target = format_args!("{target:#x}"),
            taken,
            trained = record.updates_table(),
            "bpu resolution"
        );
    }

    /// Discards the branch, consuming its record.
    ///
    /// Pure rollback: the history register returns to exactly the value the
    /// record observed, with no replay, and the table is never touched.
    fn squash(&mut self, tid: ThreadId, record: PredictionRecord) {
        self.history.rollback(tid, record.history());
        self.stats.squashes += 1;
        trace!(
            tid = tid.index(),
            restored = record.history(),
            "bpu squash, history rolled back"
        );
    }
}
