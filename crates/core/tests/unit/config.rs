//! Configuration Validation and Deserialization Tests.
//!
//! Verifies that parameter validation rejects every out-of-range
//! configuration with the right error, that valid configurations pass, and
//! that the JSON deserialization surface fills defaults the same way
//! `Default` does.

use bpusim_core::common::ConfigError;
use bpusim_core::config::{BpuConfig, CorrelatingConfig, PredictorKind};
use rstest::rstest;

/// Builds a correlating config with the given parameters.
fn corr(n_local: usize, m: u32, n: u32) -> CorrelatingConfig {
    CorrelatingConfig {
        n_local_predictors: n_local,
        m,
        n,
    }
}

// ══════════════════════════════════════════════════════════
// 1. Validation
// ══════════════════════════════════════════════════════════

/// Non-power-of-two predictor counts are rejected.
#[rstest]
#[case(3)]
#[case(12)]
#[case(100)]
#[case(65535)]
fn rejects_non_power_of_two_rows(#[case] count: usize) {
    let err = corr(count, 4, 2).validate().unwrap_err();
    assert_eq!(err, ConfigError::PredictorCountNotPowerOfTwo(count));
}

/// Predictor counts above 65536 are rejected even when a power of two.
#[test]
fn rejects_oversized_row_count() {
    let err = corr(1 << 17, 4, 2).validate().unwrap_err();
    assert_eq!(
        err,
        ConfigError::PredictorCountTooLarge {
            got: 1 << 17,
            max: 1 << 16,
        }
    );
}

/// History width parameters outside 1..=16 are rejected.
#[rstest]
#[case(0)]
#[case(17)]
#[case(32)]
fn rejects_history_width(#[case] m: u32) {
    let err = corr(16, m, 2).validate().unwrap_err();
    assert_eq!(err, ConfigError::HistoryWidthOutOfRange { got: m, max: 16 });
}

/// Counter width parameters outside 1..=16 are rejected.
#[rstest]
#[case(0)]
#[case(17)]
fn rejects_counter_width(#[case] n: u32) {
    let err = corr(16, 4, n).validate().unwrap_err();
    assert_eq!(err, ConfigError::CounterWidthOutOfRange { got: n, max: 16 });
}

/// Boundary parameters are accepted: the smallest and largest supported
/// widths and row counts all validate.
#[rstest]
#[case(1, 1, 1)]
#[case(2, 3, 2)]
#[case(1 << 16, 16, 16)]
fn accepts_boundary_parameters(#[case] n_local: usize, #[case] m: u32, #[case] n: u32) {
    assert!(corr(n_local, m, n).validate().is_ok());
}

/// Unit-level validation requires at least one hardware thread.
#[test]
fn rejects_zero_threads() {
    let config = BpuConfig {
        num_threads: 0,
        ..BpuConfig::default()
    };
    assert_eq!(config.validate().unwrap_err(), ConfigError::NoHardwareThreads);
}

/// A static unit ignores correlating parameters during validation.
#[test]
fn static_unit_skips_correlating_validation() {
    let config = BpuConfig {
        predictor: PredictorKind::Static,
        correlating: corr(3, 99, 0),
        ..BpuConfig::default()
    };
    assert!(config.validate().is_ok());
}

/// Errors render a human-readable description.
#[test]
fn errors_display_constraint() {
    let err = corr(3, 4, 2).validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "number of local predictors must be a power of two, got 3"
    );
}

// ══════════════════════════════════════════════════════════
// 2. Defaults and deserialization
// ══════════════════════════════════════════════════════════

/// Defaults are valid and predict with the static variant.
#[test]
fn default_config_is_valid() {
    let config = BpuConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.predictor, PredictorKind::Static);
    assert_eq!(config.num_threads, 1);
    assert_eq!(config.inst_shift, 2);
}

/// An empty JSON object deserializes to the defaults.
#[test]
fn empty_json_matches_defaults() {
    let config: BpuConfig = serde_json::from_str("{}").unwrap();
    let defaults = BpuConfig::default();
    assert_eq!(config.num_threads, defaults.num_threads);
    assert_eq!(config.inst_shift, defaults.inst_shift);
    assert_eq!(config.predictor, defaults.predictor);
    assert_eq!(
        config.correlating.n_local_predictors,
        defaults.correlating.n_local_predictors
    );
    assert_eq!(config.correlating.m, defaults.correlating.m);
    assert_eq!(config.correlating.n, defaults.correlating.n);
}

/// Explicit JSON fields override the defaults.
#[test]
fn json_overrides_apply() {
    let json = r#"{
        "num_threads": 4,
        "predictor": "Correlating",
        "correlating": { "n_local_predictors": 256, "m": 12, "n": 3 }
    }"#;
    let config: BpuConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.num_threads, 4);
    assert_eq!(config.predictor, PredictorKind::Correlating);
    assert_eq!(config.correlating.n_local_predictors, 256);
    assert_eq!(config.correlating.m, 12);
    assert_eq!(config.correlating.n, 3);
    assert!(config.validate().is_ok());
}

/// Partial nested objects fill the remaining fields from defaults.
#[test]
fn partial_correlating_json_fills_defaults() {
    let json = r#"{ "correlating": { "m": 5 } }"#;
    let config: BpuConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.correlating.m, 5);
    assert_eq!(config.correlating.n, 2);
    assert_eq!(config.correlating.n_local_predictors, 2048);
}
