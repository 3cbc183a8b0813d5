//! Configuration for the branch prediction unit.
//!
//! This module defines all configuration structures and enums used to
//! parameterize the prediction unit. It provides:
//! 1. **Defaults:** Baseline hardware constants (predictor sizes, bit widths).
//! 2. **Structures:** Hierarchical config for the unit and each algorithm.
//! 3. **Validation:** Eager parameter checking, fatal at construction time.
//!
//! Configuration is supplied via JSON from the embedding simulator or use
//! `BpuConfig::default()` for a standalone unit.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the prediction unit.
///
/// These values define the baseline hardware configuration when not
/// explicitly overridden by the embedding simulator.
mod defaults {
    /// Default number of simulated hardware threads (one history register each).
    pub const NUM_THREADS: usize = 1;

    /// Default instruction alignment shift applied to branch addresses.
    ///
    /// Branch addresses are shifted right by this amount before hashing so
    /// that the low alignment bits do not waste table index space. A value
    /// of 2 matches 4-byte instruction alignment.
    pub const INST_SHIFT: u32 = 2;

    /// Default number of local predictor rows in the correlating table.
    pub const N_LOCAL_PREDICTORS: usize = 2048;

    /// Default global history width parameter `m`.
    ///
    /// The effective history register width is `m - 1` bits, and each table
    /// row holds `2^(m - 1)` counters.
    pub const HISTORY_BITS: u32 = 9;

    /// Default local counter width parameter `n` (2-bit saturating counters).
    pub const COUNTER_BITS: u32 = 2;

    /// Largest supported number of local predictor rows.
    pub const N_LOCAL_PREDICTORS_MAX: usize = 1 << 16;

    /// Largest supported global history width parameter.
    pub const HISTORY_BITS_MAX: u32 = 16;

    /// Largest supported local counter width parameter.
    pub const COUNTER_BITS_MAX: u32 = 16;
}

/// Branch direction prediction algorithm types.
///
/// Specifies the algorithm the unit uses to predict conditional branch
/// directions. The embedding simulator selects an implementation through
/// this enum rather than through a trait object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PredictorKind {
    /// Static branch predictor (always predict not-taken).
    ///
    /// Keeps no direction history; useful as a baseline.
    #[default]
    Static,
    /// Two-level correlating predictor.
    ///
    /// Hashes the branch address to a row of saturating counters and selects
    /// a counter within the row by the thread's global branch history.
    Correlating,
}

/// Branch prediction unit configuration.
///
/// Deserialize this from JSON supplied by the embedding simulator or use
/// `BpuConfig::default()`.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use bpusim_core::config::BpuConfig;
///
/// let config = BpuConfig::default();
/// assert_eq!(config.num_threads, 1);
/// assert_eq!(config.correlating.n_local_predictors, 2048);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use bpusim_core::config::{BpuConfig, PredictorKind};
///
/// let json = r#"{
///     "num_threads": 2,
///     "predictor": "Correlating",
///     "correlating": {
///         "n_local_predictors": 4096,
///         "m": 10,
///         "n": 2
///     }
/// }"#;
///
/// let config: BpuConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.num_threads, 2);
/// assert_eq!(config.predictor, PredictorKind::Correlating);
/// assert_eq!(config.correlating.m, 10);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct BpuConfig {
    /// Number of simulated hardware threads (independent history registers)
    #[serde(default = "BpuConfig::default_num_threads")]
    pub num_threads: usize,

    /// Instruction alignment shift applied to branch addresses before hashing
    #[serde(default = "BpuConfig::default_inst_shift")]
    pub inst_shift: u32,

    /// Direction prediction algorithm
    #[serde(default)]
    pub predictor: PredictorKind,

    /// Correlating predictor configuration
    #[serde(default)]
    pub correlating: CorrelatingConfig,
}

impl BpuConfig {
    /// Returns the default number of simulated hardware threads.
    fn default_num_threads() -> usize {
        defaults::NUM_THREADS
    }

    /// Returns the default instruction alignment shift.
    fn default_inst_shift() -> u32 {
        defaults::INST_SHIFT
    }

    /// Validates the configuration.
    ///
    /// Checks the thread count and the parameters of the selected algorithm.
    /// Predictor constructors call this eagerly, so an invalid configuration
    /// can never produce a usable unit.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_threads == 0 {
            return Err(ConfigError::NoHardwareThreads);
        }
        match self.predictor {
            PredictorKind::Static => Ok(()),
            PredictorKind::Correlating => self.correlating.validate(),
        }
    }
}

impl Default for BpuConfig {
    /// Creates a default unit configuration.
    ///
    /// Single-threaded, 4-byte instruction alignment, static predictor, and
    /// default correlating parameters.
    fn default() -> Self {
        Self {
            num_threads: defaults::NUM_THREADS,
            inst_shift: defaults::INST_SHIFT,
            predictor: PredictorKind::default(),
            correlating: CorrelatingConfig::default(),
        }
    }
}

/// Two-level correlating predictor configuration.
///
/// The parameter names follow the usual (m, n) correlating predictor
/// convention: `m` sizes the global history, `n` sizes each local counter.
#[derive(Debug, Clone, Deserialize)]
pub struct CorrelatingConfig {
    /// Number of local predictor rows (must be a power of two, at most 65536)
    #[serde(default = "CorrelatingConfig::default_n_local_predictors")]
    pub n_local_predictors: usize,

    /// Global history width parameter (effective register width is `m - 1` bits)
    #[serde(default = "CorrelatingConfig::default_history_bits")]
    pub m: u32,

    /// Local counter width parameter (counters saturate at `2^n - 1`)
    #[serde(default = "CorrelatingConfig::default_counter_bits")]
    pub n: u32,
}

impl CorrelatingConfig {
    /// Returns the default number of local predictor rows.
    fn default_n_local_predictors() -> usize {
        defaults::N_LOCAL_PREDICTORS
    }

    /// Returns the default global history width parameter.
    fn default_history_bits() -> u32 {
        defaults::HISTORY_BITS
    }

    /// Returns the default local counter width parameter.
    fn default_counter_bits() -> u32 {
        defaults::COUNTER_BITS
    }

    /// Validates the correlating predictor parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the row count is not a power of two or
    /// exceeds its maximum, or if `m` or `n` fall outside `1..=16`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.n_local_predictors.is_power_of_two() {
            return Err(ConfigError::PredictorCountNotPowerOfTwo(
                self.n_local_predictors,
            ));
        }
        if self.n_local_predictors > defaults::N_LOCAL_PREDICTORS_MAX {
            return Err(ConfigError::PredictorCountTooLarge {
                got: self.n_local_predictors,
                max: defaults::N_LOCAL_PREDICTORS_MAX,
            });
        }
        if self.m == 0 || self.m > defaults::HISTORY_BITS_MAX {
            return Err(ConfigError::HistoryWidthOutOfRange {
                got: self.m,
                max: defaults::HISTORY_BITS_MAX,
            });
        }
        if self.n == 0 || self.n > defaults::COUNTER_BITS_MAX {
            return Err(ConfigError::CounterWidthOutOfRange {
                got: self.n,
                max: defaults::COUNTER_BITS_MAX,
            });
        }
        Ok(())
    }
}

impl Default for CorrelatingConfig {
    /// Creates a default correlating predictor configuration.
    ///
    /// 2048 rows of 2-bit counters with an `m = 9` history parameter.
    fn default() -> Self {
        Self {
            n_local_predictors: defaults::N_LOCAL_PREDICTORS,
            m: defaults::HISTORY_BITS,
            n: defaults::COUNTER_BITS,
        }
    }
}
