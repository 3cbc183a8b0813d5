//! Per-thread global history registers.
//!
//! Each simulated hardware thread owns one fixed-width shift register of
//! recent branch outcomes, most-recent outcome in bit 0. The register
//! advances speculatively as soon as an outcome is assumed, so three
//! distinct recovery mechanics are provided:
//! 1. **Advance:** Shift in a speculative outcome bit.
//! 2. **Restore:** Roll back to a saved value, then replay the real outcome
//!    (used when a misprediction is discovered at resolution time).
//! 3. **Rollback:** Return to a saved value with no replay (used when the
//!    pipeline flushes a branch outright).

use crate::common::ThreadId;

/// The global history registers for all simulated hardware threads.
///
/// The effective register width is `m - 1` bits for a width parameter of
/// `m`; values are always masked to that width.
#[derive(Debug, Clone)]
pub struct GlobalHistory {
    /// One history register per hardware thread.
    registers: Vec<u32>,
    /// Width mask, `2^(m - 1) - 1`.
    mask: u32,
}

impl GlobalHistory {
    /// Creates one zeroed history register per thread.
    ///
    /// `history_bits` is the width parameter `m`; the registers are
    /// `m - 1` bits wide.
    pub fn new(num_threads: usize, history_bits: u32) -> Self {
        Self {
            registers: vec![0; num_threads],
            mask: (1u32 << (history_bits - 1)) - 1,
        }
    }

    /// Shifts the outcome bit into the thread's register.
    #[inline(always)]
    pub fn advance(&mut self, tid: ThreadId, taken: bool) {
        let reg = &mut self.registers[tid.index()];
        *reg = ((*reg << 1) | u32::from(taken)) & self.mask;
    }

    /// Returns the thread's current history value.
    #[inline(always)]
    pub fn snapshot(&self, tid: ThreadId) -> u32 {
        self.registers[tid.index()]
    }

    /// Rolls the register back to `saved`, then replays the real outcome.
    ///
    /// Equivalent to a rollback immediately followed by an advance with the
    /// now-known outcome, collapsed into one operation.
    #[inline(always)]
    pub fn restore(&mut self, tid: ThreadId, saved: u32, taken: bool) {
        self.registers[tid.index()] = ((saved << 1) | u32::from(taken)) & self.mask;
    }

    /// Rolls the register back to `saved` with no replay.
    #[inline(always)]
    pub fn rollback(&mut self, tid: ThreadId, saved: u32) {
        self.registers[tid.index()] = saved;
    }

    /// Returns the register width mask, `2^(m - 1) - 1`.
    #[inline(always)]
    pub const fn mask(&self) -> u32 {
        self.mask
    }
}
