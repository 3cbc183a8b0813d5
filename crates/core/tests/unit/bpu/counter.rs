//! Saturating Counter Properties.
//!
//! Verifies the clamping arithmetic for all supported bit widths: counters
//! never leave `[0, 2^n - 1]` under any operation sequence, and the strict
//! midpoint threshold drives the taken decision.

use bpusim_core::bpu::counter::SaturatingCounter;
use proptest::prelude::*;

proptest! {
    /// For all op sequences and widths, the value stays within `[0, 2^n - 1]`.
    #[test]
    fn value_stays_in_range(
        bits in 1u32..=16,
        ops in proptest::collection::vec(any::<bool>(), 0..256),
    ) {
        let mut ctr = SaturatingCounter::new(bits);
        let max = (1u32 << bits) - 1;
        for increment in ops {
            if increment {
                ctr.increment();
            } else {
                ctr.decrement();
            }
            prop_assert!(u32::from(ctr.read()) <= max);
        }
    }

    /// Increments alone reach exactly the ceiling and stay there.
    #[test]
    fn increments_saturate_at_ceiling(bits in 1u32..=10) {
        let mut ctr = SaturatingCounter::new(bits);
        let max = (1u32 << bits) - 1;
        for _ in 0..=(max + 3) {
            ctr.increment();
        }
        prop_assert_eq!(u32::from(ctr.read()), max);
    }
}

/// With n = 2 (range 0..3), three decrements from 0 leave the value at 0.
#[test]
fn two_bit_decrement_floor() {
    let mut ctr = SaturatingCounter::new(2);
    ctr.decrement();
    ctr.decrement();
    ctr.decrement();
    assert_eq!(ctr.read(), 0);
}

/// With n = 2, five increments from 0 leave the value at 3.
#[test]
fn two_bit_increment_ceiling() {
    let mut ctr = SaturatingCounter::new(2);
    for _ in 0..5 {
        ctr.increment();
    }
    assert_eq!(ctr.read(), 3);
}

/// With n = 2 the midpoint threshold is 1: values 2 and 3 are above it,
/// values 0 and 1 are not.
#[test]
fn two_bit_threshold_partition() {
    let mut ctr = SaturatingCounter::new(2);
    assert!(!ctr.is_above(1)); // 0
    ctr.increment();
    assert!(!ctr.is_above(1)); // 1
    ctr.increment();
    assert!(ctr.is_above(1)); // 2
    ctr.increment();
    assert!(ctr.is_above(1)); // 3
}
