//! Register Arithmetic Tests
//!
//! Deterministic edge-case vectors for the datapath primitives:
//!   - Masking and two's-complement reinterpretation at width boundaries
//!   - Wrapping add/subtract (wrap, never saturate)
//!   - Truncating multiply: floor rounding and bit-slice selection

use rstest::rstest;
use taylorsim_core::fixed::{
    mask_unsigned, reinterpret_signed, truncating_mul, wrap, wrapping_add, wrapping_sub,
};

const I32_MAX: i64 = i32::MAX as i64;
const I32_MIN: i64 = i32::MIN as i64;

// ─── Masking / reinterpretation ──────────────────────────────────────────────

#[rstest]
#[case(-1, 32, 0xFFFF_FFFF)]
#[case(-1, 1, 1)]
#[case(0x1_0000_0000, 32, 0)]
#[case(0x1_2345_6789, 32, 0x2345_6789)]
#[case(-0x8000_0000, 32, 0x8000_0000)]
fn mask_keeps_low_bits(#[case] value: i128, #[case] bits: u32, #[case] want: i128) {
    assert_eq!(mask_unsigned(value, bits), want);
}

#[rstest]
#[case(0x7FFF_FFFF, 32, 0x7FFF_FFFF)]
#[case(0x8000_0000, 32, -0x8000_0000)]
#[case(0xFFFF_FFFF, 32, -1)]
#[case(0x7F, 8, 127)]
#[case(0x80, 8, -128)]
#[case(0, 1, 0)]
#[case(1, 1, -1)]
fn reinterpret_top_bit_is_sign(#[case] value: i128, #[case] bits: u32, #[case] want: i128) {
    assert_eq!(reinterpret_signed(value, bits), want);
}

#[test]
fn wrap_is_modular() {
    assert_eq!(wrap(i128::from(I32_MAX) + 1, 32), I32_MIN);
    assert_eq!(wrap(1i128 << 32, 32), 0);
    assert_eq!(wrap(-(1i128 << 32) - 1, 32), -1);
}

// ─── Wrapping add / sub ──────────────────────────────────────────────────────

#[rstest]
#[case(I32_MAX, 1, 32, I32_MIN)]
#[case(I32_MIN, -1, 32, I32_MAX)]
#[case(100, 100, 8, -56)]
#[case(-128, -128, 8, 0)]
#[case(5, -7, 32, -2)]
fn add_wraps_never_saturates(
    #[case] a: i64,
    #[case] b: i64,
    #[case] bits: u32,
    #[case] want: i64,
) {
    assert_eq!(wrapping_add(a, b, bits), want);
}

#[test]
fn sub_wraps_at_boundaries() {
    assert_eq!(wrapping_sub(I32_MIN, 1, 32), I32_MAX);
    assert_eq!(wrapping_sub(I32_MAX, -1, 32), I32_MIN);
    assert_eq!(wrapping_sub(0, I32_MIN, 32), I32_MIN);
}

// ─── Truncating multiply ─────────────────────────────────────────────────────

#[rstest]
#[case::three_squared(196608, 196608, 32, 16, 589824)]
#[case::one_times_minus_half(65536, -32768, 32, 16, -32768)]
#[case::floor_not_toward_zero(-3, 5, 32, 1, -8)]
#[case::smallest_negative_product(-1, 1, 32, 16, -1)]
#[case::positive_underflow_truncates(1, 1, 32, 16, 0)]
#[case::max_squared_wraps(I32_MAX, I32_MAX, 32, 16, -65536)]
#[case::min_squared_wraps_to_zero(I32_MIN, I32_MIN, 32, 16, 0)]
#[case::integer_format(-7, 6, 8, 0, -42)]
#[case::integer_overflow(16, 16, 8, 0, 0)]
fn truncating_mul_vectors(
    #[case] a: i64,
    #[case] b: i64,
    #[case] data_width: u32,
    #[case] frac_bits: u32,
    #[case] want: i64,
) {
    assert_eq!(truncating_mul(a, b, data_width, frac_bits), want);
}

#[test]
fn truncating_mul_selects_product_slice() {
    // bits [47:16] of the 64-bit product
    let a = 0x0012_3456;
    let b = 0x0789_ABCD;
    let full = i128::from(a) * i128::from(b);
    let slice = ((full as u128 >> 16) & 0xFFFF_FFFF) as u32 as i32;
    assert_eq!(truncating_mul(a, b, 32, 16), i64::from(slice));
}
