//! Global History Register Properties.
//!
//! Verifies the masking and recovery mechanics of the per-thread shift
//! registers: advanced values always stay within the effective `m - 1` bit
//! width, restore collapses rollback-plus-replay into one step, and
//! rollback is pure.

use bpusim_core::bpu::history::GlobalHistory;
use bpusim_core::common::ThreadId;
use proptest::prelude::*;

const T0: ThreadId = ThreadId(0);

proptest! {
    /// History after any advance sequence is within `[0, 2^(m-1) - 1]`.
    #[test]
    fn advance_stays_within_mask(
        m in 1u32..=16,
        outcomes in proptest::collection::vec(any::<bool>(), 0..128),
    ) {
        let mut hist = GlobalHistory::new(1, m);
        let mask = (1u32 << (m - 1)) - 1;
        for taken in outcomes {
            hist.advance(T0, taken);
            prop_assert!(hist.snapshot(T0) <= mask);
        }
    }

    /// Restore leaves the register at `((saved << 1) | taken) & mask`.
    #[test]
    fn restore_replays_exactly_one_outcome(
        m in 1u32..=16,
        saved in any::<u32>(),
        taken in any::<bool>(),
    ) {
        let mut hist = GlobalHistory::new(1, m);
        let mask = (1u32 << (m - 1)) - 1;
        let saved = saved & mask;
        hist.restore(T0, saved, taken);
        prop_assert_eq!(hist.snapshot(T0), ((saved << 1) | u32::from(taken)) & mask);
    }

    /// Rollback leaves the register at exactly the saved value.
    #[test]
    fn rollback_is_exact(m in 1u32..=16, saved in any::<u32>()) {
        let mut hist = GlobalHistory::new(1, m);
        let mask = (1u32 << (m - 1)) - 1;
        let saved = saved & mask;
        hist.advance(T0, true);
        hist.advance(T0, false);
        hist.rollback(T0, saved);
        prop_assert_eq!(hist.snapshot(T0), saved);
    }
}

/// The shift register is a FIFO of outcomes with the most recent in bit 0.
#[test]
fn most_recent_outcome_in_bit_zero() {
    let mut hist = GlobalHistory::new(1, 5);
    hist.advance(T0, true);
    hist.advance(T0, false);
    hist.advance(T0, true);
    assert_eq!(hist.snapshot(T0), 0b101);
    assert_eq!(hist.snapshot(T0) & 1, 1);
}

/// Registers belonging to different threads never alias.
#[test]
fn per_thread_isolation() {
    let mut hist = GlobalHistory::new(4, 8);
    for i in 0..4 {
        for _ in 0..i {
            hist.advance(ThreadId(i), true);
        }
    }
    assert_eq!(hist.snapshot(ThreadId(0)), 0b0);
    assert_eq!(hist.snapshot(ThreadId(1)), 0b1);
    assert_eq!(hist.snapshot(ThreadId(2)), 0b11);
    assert_eq!(hist.snapshot(ThreadId(3)), 0b111);
}
