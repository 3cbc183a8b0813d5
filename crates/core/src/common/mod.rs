//! Common types shared across the branch prediction unit.
//!
//! This module provides the fundamental building blocks used throughout the
//! crate. It includes:
//! 1. **Thread Identity:** A strong type for simulated hardware thread IDs.
//! 2. **Error Handling:** Construction-time configuration error definitions.

/// Configuration error definitions.
pub mod error;

/// Hardware thread identity type.
pub mod types;

pub use error::ConfigError;
pub use types::ThreadId;
