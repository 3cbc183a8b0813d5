//! Branch prediction unit library for cycle-accurate CPU simulators.
//!
//! This crate implements a speculation-aware branch direction predictor with
//! the following:
//! 1. **BPU:** Predictor variants (static, two-level correlating), the
//!    four-operation contract, and their building blocks (saturating
//!    counters, per-thread global history registers, the local predictor
//!    table, per-branch records).
//! 2. **Speculation:** Per-branch records support speculative history
//!    advance, rollback-with-replay on squashed resolutions, and pure
//!    rollback on pipeline flushes, with single consumption enforced by
//!    move semantics.
//! 3. **Configuration:** Serde-deserializable hierarchical config with
//!    eager, construction-fatal validation.
//! 4. **Statistics:** Activity counters the embedding simulator can read.
//!
//! The unit predicts directions only; target prediction (BTB, RAS) is the
//! embedding simulator's concern.

/// Branch prediction unit (trait, variants, building blocks).
pub mod bpu;
/// Common types (thread identity, configuration errors).
pub mod common;
/// Unit configuration (defaults, enums, validation).
pub mod config;
/// Activity statistics collection.
pub mod stats;

/// Root configuration type; use `BpuConfig::default()` or deserialize from JSON.
pub use crate::config::BpuConfig;

/// Main predictor type; construct with `BranchPredictorUnit::new`.
pub use crate::bpu::BranchPredictorUnit;

/// The four-operation direction prediction contract.
pub use crate::bpu::DirectionPredictor;

/// Per-branch speculative state record.
pub use crate::bpu::PredictionRecord;
