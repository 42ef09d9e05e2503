//! Error definitions.
//!
//! The arithmetic itself never fails: wraparound is the defined behavior of a
//! hardware register. Errors only arise from:
//! 1. **Format Validation:** A register width or binary point the model cannot represent.
//! 2. **Construction Contracts:** Too few coefficients for the requested order.
//! 3. **Harness Inputs:** Mismatched stimulus/expectation vectors.
//! 4. **Configuration Loading:** I/O and JSON failures when reading run descriptions.

use thiserror::Error;

use super::constants::MAX_DATA_WIDTH;

/// Invalid fixed-point format parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A register must hold at least one bit.
    #[error("data width must be at least 1 bit")]
    ZeroWidth,

    /// The register is wider than the model can multiply exactly.
    #[error("data width {width} exceeds the maximum of {max} bits")]
    WidthTooLarge {
        /// Requested width.
        width: u32,
        /// Supported maximum ([`MAX_DATA_WIDTH`]).
        max: u32,
    },

    /// The binary point must leave room for the sign bit.
    #[error("fractional bits {frac_bits} must be less than data width {data_width}")]
    FracBitsOutOfRange {
        /// Requested fractional bit count.
        frac_bits: u32,
        /// Requested register width.
        data_width: u32,
    },
}

impl FormatError {
    /// Builds the error reported for a width above [`MAX_DATA_WIDTH`].
    pub const fn too_wide(width: u32) -> Self {
        Self::WidthTooLarge {
            width,
            max: MAX_DATA_WIDTH,
        }
    }
}

/// Evaluator construction failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Fewer than `order + 1` coefficients were supplied.
    #[error("polynomial of order {order} needs {needed} coefficients, got {got}")]
    CoefficientsTooShort {
        /// Requested polynomial order.
        order: usize,
        /// Coefficients required (`order + 1`).
        needed: usize,
        /// Coefficients supplied.
        got: usize,
    },

    /// The fixed-point format was rejected.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Verification harness failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// Every input needs exactly one expected value.
    #[error("{inputs} inputs but {expected} expected values")]
    LengthMismatch {
        /// Number of stimulus values.
        inputs: usize,
        /// Number of expected values.
        expected: usize,
    },

    /// A unit must take at least one clock edge to produce a result.
    #[error("unit under test reports zero latency")]
    ZeroLatency,

    /// The device under test could not be built.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Configuration loading failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured fixed-point format is invalid.
    #[error(transparent)]
    Format(#[from] FormatError),
}
