//! Configuration error definitions.
//!
//! All parameter validation happens once, eagerly, when a predictor is
//! constructed. A predictor whose parameters fail validation is never
//! created, so no partially-valid state can be observed. Runtime contract
//! violations (a missing prediction record where one is required) are caller
//! bugs and are asserted rather than reported through this type.

use thiserror::Error;

/// Errors detected while validating predictor construction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The local predictor count must be an exact power of two so that the
    /// address hash mask selects complete rows.
    #[error("number of local predictors must be a power of two, got {0}")]
    PredictorCountNotPowerOfTwo(usize),

    /// The local predictor count exceeds the supported maximum.
    #[error("number of local predictors cannot be larger than {max}, got {got}")]
    PredictorCountTooLarge {
        /// The rejected predictor count.
        got: usize,
        /// The largest supported predictor count.
        max: usize,
    },

    /// The global history width parameter `m` is outside its supported range.
    #[error("global history width m must be in 1..={max}, got {got}")]
    HistoryWidthOutOfRange {
        /// The rejected width.
        got: u32,
        /// The largest supported width.
        max: u32,
    },

    /// The local counter width parameter `n` is outside its supported range.
    #[error("local counter width n must be in 1..={max}, got {got}")]
    CounterWidthOutOfRange {
        /// The rejected width.
        got: u32,
        /// The largest supported width.
        max: u32,
    },

    /// At least one global history register must be allocated.
    #[error("at least one hardware thread is required")]
    NoHardwareThreads,
}
