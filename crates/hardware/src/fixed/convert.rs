//! Conversions between real numbers and fixed-point register values.
//!
//! These are harness conveniences for building stimulus and reading results;
//! the evaluation datapath never touches floating point.

use super::arithmetic::wrap;

/// Returns `2^frac_bits` as an `f64`.
#[inline]
pub fn scale(frac_bits: u32) -> f64 {
    (1u128 << frac_bits) as f64
}

/// Converts a real number to a signed fixed-point register value.
///
/// Scales by `2^frac_bits`, rounds to the nearest integer (ties to even),
/// then wraps into `data_width` bits. Values outside the representable range
/// wrap silently, like a testbench literal truncated to the port width.
///
/// # Examples
///
/// ```
/// use taylorsim_core::fixed::real_to_fixed;
///
/// assert_eq!(real_to_fixed(1.0, 16, 32), 65536);
/// assert_eq!(real_to_fixed(-3.0, 16, 32), -196608);
/// ```
pub fn real_to_fixed(r: f64, frac_bits: u32, data_width: u32) -> i64 {
    let raw = (r * scale(frac_bits)).round_ties_even();
    // Reduce in f64 first: `%` is exact, and the remainder always fits an
    // i128. Non-finite inputs become NaN here and cast to zero.
    let reduced = raw % scale(data_width);
    wrap(reduced as i128, data_width)
}

/// Converts a signed fixed-point value to a real number.
pub fn fixed_to_real(v: i64, frac_bits: u32) -> f64 {
    v as f64 / scale(frac_bits)
}
