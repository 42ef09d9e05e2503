//! Common utilities and types used throughout the evaluator model.
//!
//! This module provides the building blocks shared across all components:
//! 1. **Constants:** Default and maximum fixed-point format parameters.
//! 2. **Error Handling:** Construction, harness and configuration errors.

/// Common constants used throughout the model.
pub mod constants;

/// Error types.
pub mod error;

pub use constants::{DEFAULT_DATA_WIDTH, DEFAULT_FRAC_BITS, MAX_DATA_WIDTH};
pub use error::{ConfigError, FormatError, HarnessError, PipelineError};
