//! Branch prediction unit tests.


/// Saturating counter property tests.
pub mod counter;

/// Global history register property tests.
pub mod history;
