//! Fixed-point arithmetic layer.
//!
//! Pure, stateless functions that reproduce the numeric behavior of the
//! hardware datapath bit for bit:
//! - [`arithmetic`]: masking, signed reinterpretation, wrapping add/sub, truncating multiply
//! - [`convert`]:    real <-> fixed conversions used by the harness
//! - [`format`]:     the validated [`FixedFormat`] that binds both to one register format
//!
//! Every function here is total. Overflow wraps modulo `2^data_width`; it is
//! never detected, clamped or reported.

/// Register-width integer arithmetic.
pub mod arithmetic;

/// Real-number conversions.
pub mod convert;

/// Validated fixed-point format.
pub mod format;

pub use arithmetic::{
    mask_unsigned, reinterpret_signed, truncating_mul, wrap, wrapping_add, wrapping_sub,
};
pub use convert::{fixed_to_real, real_to_fixed};
pub use format::FixedFormat;
