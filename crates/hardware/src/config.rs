//! Configuration system for the evaluator model.
//!
//! This module defines the structures used to describe verification runs. It provides:
//! 1. **Defaults:** Baseline fixed-point format and harness tolerance.
//! 2. **Structures:** The register format and a list of run descriptions.
//! 3. **Built-ins:** The two reference demonstrations (x^2 and 5-term e^x).
//!
//! Configuration is supplied as JSON (`Config::from_json`, `Config::from_path`)
//! or taken from `Config::builtin()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::common::error::{ConfigError, FormatError, PipelineError};
use crate::core::HornerPipeline;
use crate::fixed::FixedFormat;
use crate::sim::reference::ExpectedFn;

/// Default configuration constants.
mod defaults {
    pub use crate::common::constants::{
        DEFAULT_DATA_WIDTH as DATA_WIDTH, DEFAULT_FRAC_BITS as FRAC_BITS,
        DEFAULT_TOLERANCE_LSB as TOLERANCE_LSB,
    };

    /// 1.0 in Q15.16.
    pub const FP_1: i64 = 65536;
    /// 0.5 in Q15.16.
    pub const FP_HALF: i64 = 32768;
    /// 1/6 in Q15.16 (`0x0000_2AAB`).
    pub const FP_1_6: i64 = 10923;
    /// 1/24 in Q15.16 (`0x0000_0AAB`).
    pub const FP_1_24: i64 = 2731;
    /// Depth of the coefficient ROM in the reference testbench.
    pub const ROM_DEPTH: usize = 8;
}

/// Root configuration: a register format and the runs to verify with it.
///
/// # Examples
///
/// ```
/// use taylorsim_core::config::{CoefficientSpec, Config};
///
/// let json = r#"{
///     "format": { "data_width": 24, "frac_bits": 12 },
///     "runs": [{
///         "label": "line",
///         "order": 1,
///         "coefficients": { "real": [0.5, 2.0] },
///         "inputs": [0.0, 1.0, -1.5]
///     }]
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.format.data_width, 24);
/// assert_eq!(config.runs[0].tolerance_lsb, 2);
/// assert_eq!(config.runs[0].coefficients, CoefficientSpec::Real(vec![0.5, 2.0]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Register format shared by every run.
    #[serde(default)]
    pub format: FormatConfig,
    /// Runs to execute, in order.
    #[serde(default)]
    pub runs: Vec<RunSpec>,
}

impl Config {
    /// The reference demonstrations in Q15.16.
    ///
    /// 1. `x^2`: order 2, coefficients (0, 0, 1.0), inputs -3..=3, 2 LSB tolerance.
    /// 2. `e^x`: order 4, coefficients (1, 1, 1/2, 1/6, 1/24), 16 LSB tolerance,
    ///    checked against the 5-term series rather than `exp`.
    ///
    /// Coefficients are given as raw literals padded to the testbench ROM depth.
    pub fn builtin() -> Self {
        let rom = |prefix: &[i64]| {
            let mut words = prefix.to_vec();
            words.resize(defaults::ROM_DEPTH, 0);
            CoefficientSpec::Raw(words)
        };
        Self {
            format: FormatConfig::default(),
            runs: vec![
                RunSpec {
                    label: "x^2".to_owned(),
                    order: 2,
                    x0: 0.0,
                    coefficients: rom(&[0, 0, defaults::FP_1]),
                    inputs: vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0],
                    tolerance_lsb: 2,
                    expected: ExpectedFn::Square,
                },
                RunSpec {
                    label: "e^x".to_owned(),
                    order: 4,
                    x0: 0.0,
                    coefficients: rom(&[
                        defaults::FP_1,
                        defaults::FP_1,
                        defaults::FP_HALF,
                        defaults::FP_1_6,
                        defaults::FP_1_24,
                    ]),
                    inputs: vec![-1.0, 0.0, 0.5, 1.0, 2.0, 0.25],
                    tolerance_lsb: 16,
                    expected: ExpectedFn::ExpSeries,
                },
            ],
        }
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and
    /// [`ConfigError::Format`] for an invalid register format.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        let _ = config.format.to_format()?;
        debug!(runs = config.runs.len(), "configuration parsed");
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_json`](Self::from_json).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");
        Self::from_json(&fs::read_to_string(path)?)
    }
}

/// Fixed-point register format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FormatConfig {
    /// Register width in bits.
    #[serde(default = "FormatConfig::default_data_width")]
    pub data_width: u32,

    /// Fractional bits.
    #[serde(default = "FormatConfig::default_frac_bits")]
    pub frac_bits: u32,
}

impl FormatConfig {
    /// Returns the default register width.
    const fn default_data_width() -> u32 {
        defaults::DATA_WIDTH
    }

    /// Returns the default fractional bit count.
    const fn default_frac_bits() -> u32 {
        defaults::FRAC_BITS
    }

    /// Validates the pair into a [`FixedFormat`].
    ///
    /// # Errors
    ///
    /// See [`FixedFormat::new`].
    pub const fn to_format(self) -> Result<FixedFormat, FormatError> {
        FixedFormat::new(self.data_width, self.frac_bits)
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            data_width: defaults::DATA_WIDTH,
            frac_bits: defaults::FRAC_BITS,
        }
    }
}

/// Polynomial coefficients, either as register literals or real numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoefficientSpec {
    /// Raw register values, used verbatim (`{"raw": [65536, 32768]}`).
    Raw(Vec<i64>),
    /// Real values, rounded into the register format (`{"real": [1.0, 0.5]}`).
    Real(Vec<f64>),
}

impl CoefficientSpec {
    /// Number of coefficients supplied.
    pub fn len(&self) -> usize {
        match self {
            Self::Raw(v) => v.len(),
            Self::Real(v) => v.len(),
        }
    }

    /// Whether no coefficients were supplied.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coefficients as register values in `format`.
    pub fn to_raw(&self, format: FixedFormat) -> Vec<i64> {
        match self {
            Self::Raw(v) => v.iter().map(|&c| format.wrap(i128::from(c))).collect(),
            Self::Real(v) => v.iter().map(|&c| format.from_real(c)).collect(),
        }
    }

    /// Coefficients as real numbers.
    ///
    /// Raw literals are wrapped like [`to_raw`](Self::to_raw) and converted
    /// exactly; real values are returned as given, so expectations follow the
    /// intended polynomial rather than its quantized form.
    pub fn to_real(&self, format: FixedFormat) -> Vec<f64> {
        match self {
            Self::Raw(v) => v
                .iter()
                .map(|&c| format.to_real(format.wrap(i128::from(c))))
                .collect(),
            Self::Real(v) => v.clone(),
        }
    }
}

/// One verification run: a polynomial, a stimulus vector and a tolerance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunSpec {
    /// Label prefixed to every reported comparison.
    pub label: String,

    /// Polynomial degree.
    pub order: usize,

    /// Expansion point.
    #[serde(default)]
    pub x0: f64,

    /// Coefficients `c0, c1, ...` (at least `order + 1`).
    pub coefficients: CoefficientSpec,

    /// Real inputs, one per clock edge.
    pub inputs: Vec<f64>,

    /// Allowed absolute error in least-significant bits.
    #[serde(default = "RunSpec::default_tolerance_lsb")]
    pub tolerance_lsb: u32,

    /// Reference the outputs are compared against.
    #[serde(default)]
    pub expected: ExpectedFn,
}

impl RunSpec {
    /// Returns the default comparison tolerance.
    const fn default_tolerance_lsb() -> u32 {
        defaults::TOLERANCE_LSB
    }

    /// Builds the evaluator described by this run.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::CoefficientsTooShort`] if fewer than
    /// `order + 1` coefficients are configured.
    pub fn build_pipeline(&self, format: FixedFormat) -> Result<HornerPipeline, PipelineError> {
        HornerPipeline::new(
            &self.coefficients.to_raw(format),
            self.order,
            format.from_real(self.x0),
            format,
        )
    }

    /// Expected real output for every input.
    pub fn expected_values(&self, format: FixedFormat) -> Vec<f64> {
        let mut coefficients = self.coefficients.to_real(format);
        coefficients.truncate(self.order + 1);
        self.inputs
            .iter()
            .map(|&x| self.expected.evaluate(x, self.x0, &coefficients))
            .collect()
    }
}
