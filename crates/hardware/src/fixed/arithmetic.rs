//! Register-width integer arithmetic.
//!
//! Implements the bit-level operations of the datapath: masking to a register
//! width, two's-complement reinterpretation, wrapping add/subtract, and the
//! truncating fixed-point multiplier.
//!
//! Intermediates are carried in `i128`. Operands are at most 64 bits wide
//! (see [`MAX_DATA_WIDTH`](crate::common::MAX_DATA_WIDTH)), so every sum and
//! full product is exact before it is cut back to the register width.

/// Keeps only the low `bits` bits of `value`.
///
/// Negative inputs are masked through their two's-complement representation,
/// so `mask_unsigned(-1, 8) == 0xFF`.
///
/// # Arguments
///
/// * `value` - Any integer (typically an unbounded sum or product).
/// * `bits`  - Register width, `1..=127`.
///
/// # Returns
///
/// The non-negative bit pattern held by a `bits`-wide register.
#[inline(always)]
pub const fn mask_unsigned(value: i128, bits: u32) -> i128 {
    value & ((1i128 << bits) - 1)
}

/// Interprets an unsigned `bits`-wide pattern as a two's-complement value.
///
/// Patterns with bit `bits - 1` set have `2^bits` subtracted; all others are
/// returned unchanged.
///
/// # Arguments
///
/// * `value` - Bit pattern in `0..2^bits`.
/// * `bits`  - Register width, `1..=127`.
#[inline(always)]
pub const fn reinterpret_signed(value: i128, bits: u32) -> i128 {
    if value >= (1i128 << (bits - 1)) {
        value - (1i128 << bits)
    } else {
        value
    }
}

/// Cuts an unbounded result back to a signed `bits`-wide register.
///
/// This is register truncation, not overflow detection: out-of-range values
/// wrap modulo `2^bits`.
#[inline(always)]
pub const fn wrap(value: i128, bits: u32) -> i64 {
    reinterpret_signed(mask_unsigned(value, bits), bits) as i64
}

/// Adds two register values with wraparound.
#[inline(always)]
pub const fn wrapping_add(a: i64, b: i64, bits: u32) -> i64 {
    wrap(a as i128 + b as i128, bits)
}

/// Subtracts two register values with wraparound.
#[inline(always)]
pub const fn wrapping_sub(a: i64, b: i64, bits: u32) -> i64 {
    wrap(a as i128 - b as i128, bits)
}

/// Multiplies two fixed-point values and truncates back to the register format.
///
/// Forms the exact signed product, shifts it right arithmetically by
/// `frac_bits` (rounding toward negative infinity), then keeps the low
/// `data_width` bits. This selects bits
/// `[data_width + frac_bits - 1 : frac_bits]` of the full product, exactly as
/// the multiplier output slice in the RTL does. No rounding, no saturation.
///
/// # Arguments
///
/// * `a`, `b`       - Signed `data_width`-bit operands.
/// * `data_width`   - Register width, `1..=64`.
/// * `frac_bits`    - Binary point position, `< data_width`.
///
/// # Examples
///
/// ```
/// use taylorsim_core::fixed::truncating_mul;
///
/// // 3.0 * 3.0 in Q15.16
/// assert_eq!(truncating_mul(196608, 196608, 32, 16), 589824);
/// // -15 >> 1 rounds toward negative infinity
/// assert_eq!(truncating_mul(-3, 5, 32, 1), -8);
/// ```
#[inline(always)]
pub const fn truncating_mul(a: i64, b: i64, data_width: u32, frac_bits: u32) -> i64 {
    let product = a as i128 * b as i128;
    wrap(product >> frac_bits, data_width)
}
