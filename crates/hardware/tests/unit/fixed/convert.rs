//! Conversion and Format Tests

use taylorsim_core::common::FormatError;
use taylorsim_core::fixed::{FixedFormat, fixed_to_real, real_to_fixed};

#[test]
fn q16_literals() {
    assert_eq!(real_to_fixed(1.0, 16, 32), 65536);
    assert_eq!(real_to_fixed(0.5, 16, 32), 32768);
    assert_eq!(real_to_fixed(1.0 / 6.0, 16, 32), 10923);
    assert_eq!(real_to_fixed(1.0 / 24.0, 16, 32), 2731);
    assert_eq!(real_to_fixed(-3.0, 16, 32), -196608);
}

#[test]
fn fixed_to_real_is_exact_division() {
    assert_eq!(fixed_to_real(589824, 16), 9.0);
    assert_eq!(fixed_to_real(-32768, 16), -0.5);
    assert_eq!(fixed_to_real(1, 16), 1.0 / 65536.0);
}

#[test]
fn overflowing_literal_wraps_silently() {
    // 32768.0 needs 17 integer bits
    assert_eq!(real_to_fixed(32768.0, 16, 32), i64::from(i32::MIN));
}

#[test]
fn huge_literals_wrap_instead_of_saturating() {
    // Every bit below 2^114 is zero, so the register holds zero.
    assert_eq!(real_to_fixed(2f64.powi(114), 16, 32), 0);
    assert_eq!(real_to_fixed(-(2f64.powi(200)), 16, 32), 0);
    assert_eq!(real_to_fixed(1e300, 0, 64), 0);
}

#[test]
fn huge_literals_keep_their_low_register_bits() {
    // 2^84 + 2^44 scaled by 2^16 is 2^100 + 2^60; only 2^60 survives 64 bits.
    let r = 2f64.powi(84) + 2f64.powi(44);
    assert_eq!(real_to_fixed(r, 16, 64), 1i64 << 60);
    assert_eq!(real_to_fixed(-r, 16, 64), -(1i64 << 60));
    // 2^96 + 2^31 wraps to the sign bit of a 32-bit register.
    assert_eq!(
        real_to_fixed(2f64.powi(96) + 2f64.powi(31), 0, 32),
        i64::from(i32::MIN)
    );
}

#[test]
fn infinities_wrap_to_zero() {
    assert_eq!(real_to_fixed(f64::INFINITY, 16, 32), 0);
    assert_eq!(real_to_fixed(f64::NEG_INFINITY, 16, 64), 0);
}

#[test]
fn format_bound_operations_match_free_functions() {
    let fmt = FixedFormat::new(24, 8).unwrap();
    assert_eq!(fmt.from_real(1.5), real_to_fixed(1.5, 8, 24));
    assert_eq!(fmt.to_real(384), fixed_to_real(384, 8));
    assert_eq!(fmt.mul(384, 512), 768);
    assert_eq!(fmt.add(fmt.max_raw(), 1), fmt.min_raw());
    assert_eq!(fmt.tolerance(16), 16.0 / 256.0);
    assert_eq!(fmt.to_string(), "Q15.8");
}

#[test]
fn format_validation_errors_display() {
    let err = FixedFormat::new(32, 32).unwrap_err();
    assert_eq!(
        err,
        FormatError::FracBitsOutOfRange {
            frac_bits: 32,
            data_width: 32
        }
    );
    assert!(err.to_string().contains("less than data width 32"));
    assert!(
        FixedFormat::new(128, 0)
            .unwrap_err()
            .to_string()
            .contains("maximum of 64")
    );
}
