//! Unit test modules, mirroring the source layout.

/// Branch prediction unit tests.
pub mod bpu;

/// Configuration validation and deserialization tests.
pub mod config;
