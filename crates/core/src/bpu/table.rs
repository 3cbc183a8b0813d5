//! Local predictor table.
//!
//! A 2D table of saturating counters: a row is selected by hashing the
//! branch address, and a counter within the row is selected by the thread's
//! global history value at lookup time. The table is the only mutable
//! predictor state shared across all simulated hardware threads; its
//! dimensions are fixed for its lifetime.

use super::counter::SaturatingCounter;

/// The table of local predictors for a correlating branch predictor.
#[derive(Debug, Clone)]
pub struct LocalPredictorTable {
    /// `n_local_predictors` rows of `2^(m - 1)` counters each.
    rows: Vec<Vec<SaturatingCounter>>,
    /// Row selection mask, `2^(log2(rows) - 1) - 1`.
    addr_hash_mask: u64,
    /// Alignment shift applied to branch addresses before hashing.
    inst_shift: u32,
}

impl LocalPredictorTable {
    /// Creates a table of `n_rows` rows, each holding `2^(m - 1)` zeroed
    /// counters of width `n`.
    ///
    /// The row count is validated (power of two, at most 65536) before the
    /// table is built. The address hash deliberately uses one bit fewer
    /// than `log2(n_rows)`, so only the lower half of the rows is reachable
    /// for row counts above two; this mirrors the `m - 1` history width
    /// convention and is preserved as-is.
    pub fn new(n_rows: usize, history_bits: u32, counter_bits: u32, inst_shift: u32) -> Self {
        let row_len = 1usize << (history_bits - 1);
        Self {
            rows: vec![vec![SaturatingCounter::new(counter_bits); row_len]; n_rows],
            addr_hash_mask: (1u64 << n_rows.ilog2().saturating_sub(1)) - 1,
            inst_shift,
        }
    }

    /// Hashes a branch address to a row index.
    #[inline(always)]
    pub fn row_index(&self, pc: u64) -> usize {
        ((pc >> self.inst_shift) & self.addr_hash_mask) as usize
    }

    /// Reads the counter selected by the branch address and history value.
    #[inline(always)]
    pub fn lookup(&self, pc: u64, history: u32) -> u16 {
        self.rows[self.row_index(pc)][history as usize].read()
    }

    /// Trains the selected counter with a resolved branch outcome.
    ///
    /// Strengthens the taken bias on a taken outcome, weakens it otherwise.
    /// Never called for squashed branches or for branches that bypassed
    /// lookup.
    #[inline(always)]
    pub fn resolve(&mut self, pc: u64, history: u32, taken: bool) {
        let row = self.row_index(pc);
        let counter = &mut self.rows[row][history as usize];
        if taken {
            counter.increment();
        } else {
            counter.decrement();
        }
    }
}
