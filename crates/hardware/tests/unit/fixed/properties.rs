//! Arithmetic Property Tests
//!
//! Each primitive is checked against an exact big-integer formulation:
//! floor division and Euclidean remainder on `i128`, then reinterpretation
//! of the residue as a signed register.

use proptest::prelude::*;
use taylorsim_core::fixed::{
    FixedFormat, real_to_fixed, reinterpret_signed, truncating_mul, wrap, wrapping_add,
};

/// Exact modular reduction into the signed range of a `bits`-wide register.
fn reference_wrap(value: i128, bits: u32) -> i128 {
    let modulus = 1i128 << bits;
    let residue = value.rem_euclid(modulus);
    if residue >= modulus / 2 {
        residue - modulus
    } else {
        residue
    }
}

/// `(data_width, frac_bits)` pairs covering narrow through full-width registers.
fn formats() -> impl Strategy<Value = (u32, u32)> {
    (2u32..=64).prop_flat_map(|w| (Just(w), 0..w))
}

/// A register value valid for `bits`.
fn register(bits: u32) -> impl Strategy<Value = i64> {
    (i64::MIN >> (64 - bits))..=(i64::MAX >> (64 - bits))
}

proptest! {
    #[test]
    fn wrap_matches_euclidean_residue(value in any::<i64>(), bits in 1u32..=64) {
        let value = i128::from(value) * 3 + 1;
        prop_assert_eq!(i128::from(wrap(value, bits)), reference_wrap(value, bits));
    }

    #[test]
    fn reinterpret_is_identity_in_range(bits in 1u32..=64, seed in any::<i64>()) {
        let v = reference_wrap(i128::from(seed), bits);
        let pattern = v.rem_euclid(1i128 << bits);
        prop_assert_eq!(reinterpret_signed(pattern, bits), v);
    }

    #[test]
    fn add_is_modular(
        (bits, a, b) in (1u32..=64).prop_flat_map(|w| (Just(w), register(w), register(w)))
    ) {
        let exact = i128::from(a) + i128::from(b);
        prop_assert_eq!(i128::from(wrapping_add(a, b, bits)), reference_wrap(exact, bits));
    }

    #[test]
    fn mul_is_floor_of_exact_product(
        ((w, f), a, b) in formats().prop_flat_map(|(w, f)| (Just((w, f)), register(w), register(w)))
    ) {
        let product = i128::from(a) * i128::from(b);
        let floored = product.div_euclid(1i128 << f);
        let got = truncating_mul(a, b, w, f);
        prop_assert_eq!(i128::from(got), reference_wrap(floored, w));
    }

    #[test]
    fn mul_result_fits_register((w, f) in formats(), a in any::<i64>(), b in any::<i64>()) {
        let fmt = FixedFormat::new(w, f).unwrap();
        let (a, b) = (fmt.wrap(i128::from(a)), fmt.wrap(i128::from(b)));
        prop_assert!(fmt.contains(fmt.mul(a, b)));
    }

    #[test]
    fn representable_reals_round_trip(raw in -(1i64 << 31)..(1i64 << 31)) {
        let fmt = FixedFormat::default();
        prop_assert_eq!(fmt.from_real(fmt.to_real(raw)), raw);
    }

    #[test]
    fn conversion_error_is_half_lsb(r in -30_000.0f64..30_000.0) {
        let raw = real_to_fixed(r, 16, 32);
        prop_assert!((fixed_to_real_q16(raw) - r).abs() <= 0.5 / 65536.0);
    }
}

fn fixed_to_real_q16(raw: i64) -> f64 {
    raw as f64 / 65536.0
}

#[test]
fn ties_round_to_even() {
    let lsb = 1.0 / 65536.0;
    assert_eq!(real_to_fixed(0.5 * lsb, 16, 32), 0);
    assert_eq!(real_to_fixed(1.5 * lsb, 16, 32), 2);
    assert_eq!(real_to_fixed(2.5 * lsb, 16, 32), 2);
    assert_eq!(real_to_fixed(-0.5 * lsb, 16, 32), 0);
    assert_eq!(real_to_fixed(-1.5 * lsb, 16, 32), -2);
}

#[test]
fn out_of_range_literal_wraps() {
    assert_eq!(real_to_fixed(40000.0, 16, 32), -1673527296);
}
