//! Validated fixed-point format.
//!
//! A [`FixedFormat`] pairs a register width with a binary point position and
//! binds the free arithmetic functions to it, so the pipeline never carries
//! loose `(data_width, frac_bits)` pairs around.

use std::fmt;

use super::arithmetic;
use super::convert;
use crate::common::constants::{DEFAULT_DATA_WIDTH, DEFAULT_FRAC_BITS, MAX_DATA_WIDTH};
use crate::common::error::FormatError;

/// Signed two's-complement fixed-point format `Q(data_width - frac_bits - 1).frac_bits`.
///
/// Invariants: `1 <= data_width <= 64` and `frac_bits < data_width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedFormat {
    data_width: u32,
    frac_bits: u32,
}

impl Default for FixedFormat {
    /// The 32-bit, 16-fractional-bit format of the reference datapath.
    fn default() -> Self {
        Self {
            data_width: DEFAULT_DATA_WIDTH,
            frac_bits: DEFAULT_FRAC_BITS,
        }
    }
}

impl FixedFormat {
    /// Creates a format after checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if `data_width` is zero or above
    /// [`MAX_DATA_WIDTH`], or if `frac_bits >= data_width`.
    pub const fn new(data_width: u32, frac_bits: u32) -> Result<Self, FormatError> {
        if data_width == 0 {
            return Err(FormatError::ZeroWidth);
        }
        if data_width > MAX_DATA_WIDTH {
            return Err(FormatError::too_wide(data_width));
        }
        if frac_bits >= data_width {
            return Err(FormatError::FracBitsOutOfRange {
                frac_bits,
                data_width,
            });
        }
        Ok(Self {
            data_width,
            frac_bits,
        })
    }

    /// Register width in bits.
    #[inline]
    pub const fn data_width(self) -> u32 {
        self.data_width
    }

    /// Number of fractional bits.
    #[inline]
    pub const fn frac_bits(self) -> u32 {
        self.frac_bits
    }

    /// Number of integer bits, excluding the sign bit.
    #[inline]
    pub const fn integer_bits(self) -> u32 {
        self.data_width - self.frac_bits - 1
    }

    /// Scale factor `2^frac_bits`.
    #[inline]
    pub fn scale(self) -> f64 {
        convert::scale(self.frac_bits)
    }

    /// Real value of one least-significant bit.
    #[inline]
    pub fn lsb(self) -> f64 {
        1.0 / self.scale()
    }

    /// Absolute tolerance corresponding to `lsbs` least-significant bits.
    #[inline]
    pub fn tolerance(self, lsbs: u32) -> f64 {
        f64::from(lsbs) / self.scale()
    }

    /// Most negative raw value.
    #[inline]
    pub const fn min_raw(self) -> i64 {
        -(1i128 << (self.data_width - 1)) as i64
    }

    /// Most positive raw value.
    #[inline]
    pub const fn max_raw(self) -> i64 {
        ((1i128 << (self.data_width - 1)) - 1) as i64
    }

    /// Whether `raw` is already a valid register value.
    #[inline]
    pub const fn contains(self, raw: i64) -> bool {
        raw >= self.min_raw() && raw <= self.max_raw()
    }

    /// Wraps an unbounded integer into the register.
    #[inline(always)]
    pub const fn wrap(self, value: i128) -> i64 {
        arithmetic::wrap(value, self.data_width)
    }

    /// Register adder.
    #[inline(always)]
    pub const fn add(self, a: i64, b: i64) -> i64 {
        arithmetic::wrapping_add(a, b, self.data_width)
    }

    /// Register subtractor.
    #[inline(always)]
    pub const fn sub(self, a: i64, b: i64) -> i64 {
        arithmetic::wrapping_sub(a, b, self.data_width)
    }

    /// Truncating fixed-point multiplier.
    #[inline(always)]
    pub const fn mul(self, a: i64, b: i64) -> i64 {
        arithmetic::truncating_mul(a, b, self.data_width, self.frac_bits)
    }

    /// Converts a real number to a register value (round to nearest, wrap).
    pub fn from_real(self, r: f64) -> i64 {
        convert::real_to_fixed(r, self.frac_bits, self.data_width)
    }

    /// Converts a register value to a real number.
    pub fn to_real(self, v: i64) -> f64 {
        convert::fixed_to_real(v, self.frac_bits)
    }
}

impl fmt::Display for FixedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}.{}", self.integer_bits(), self.frac_bits)
    }
}
