//! Saturating counter.
//!
//! The basic storage element of the local predictor table: a bounded counter
//! that clamps at its minimum and maximum instead of wrapping. Repeated
//! taken outcomes push it toward the maximum, repeated not-taken outcomes
//! toward zero, so its upper half encodes a taken bias.

/// An `n`-bit saturating counter with clamped increment and decrement.
///
/// The value always stays within `[0, 2^n - 1]`; all operations are total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaturatingCounter {
    /// Current counter value.
    value: u16,
    /// Saturation ceiling, `2^n - 1`.
    max: u16,
}

impl SaturatingCounter {
    /// Creates a counter of the given bit width, initialized to zero.
    ///
    /// Widths outside `1..=16` are rejected by configuration validation
    /// before any counter is built.
    #[inline]
    pub const fn new(bits: u32) -> Self {
        Self {
            value: 0,
            max: (((1u32 << bits) - 1) as u16),
        }
    }

    /// Increments the counter, saturating at `2^n - 1`.
    #[inline(always)]
    pub const fn increment(&mut self) {
        if self.value < self.max {
            self.value += 1;
        }
    }

    /// Decrements the counter, saturating at zero.
    #[inline(always)]
    pub const fn decrement(&mut self) {
        if self.value > 0 {
            self.value -= 1;
        }
    }

    /// Returns the current counter value.
    #[inline(always)]
    pub const fn read(self) -> u16 {
        self.value
    }

    /// Returns true if the counter is strictly above the given threshold.
    #[inline(always)]
    pub const fn is_above(self, threshold: u16) -> bool {
        self.value > threshold
    }
}
