//! System-wide constants for the evaluator model.
//!
//! This module centralizes the numeric limits and defaults shared by the
//! arithmetic layer, the pipeline and the harness:
//! 1. **Format Defaults:** Register width and binary point of the reference datapath.
//! 2. **Format Limits:** The widest register the model can reproduce exactly.
//! 3. **Harness Defaults:** Comparison tolerance used when a run does not specify one.

/// Default register width in bits (32-bit datapath).
pub const DEFAULT_DATA_WIDTH: u32 = 32;

/// Default number of fractional bits (Q15.16, scale 65536).
pub const DEFAULT_FRAC_BITS: u32 = 16;

/// Widest supported register width.
///
/// Two 64-bit operands produce a product of at most 127 significant bits, so
/// the full-precision product of any in-range operands fits in an `i128`.
pub const MAX_DATA_WIDTH: u32 = 64;

/// Default comparison tolerance in least-significant bits.
pub const DEFAULT_TOLERANCE_LSB: u32 = 2;
