//! Floating-point reference models.
//!
//! Expected values are computed here, independently of the fixed-point
//! datapath, as plain sums of powers rather than Horner steps.

use serde::Deserialize;

/// `n!` as an `f64`.
pub fn factorial(n: u32) -> f64 {
    (2..=n).map(f64::from).product()
}

/// Evaluates `sum c_k * (x - x0)^k`.
pub fn taylor_sum(coefficients: &[f64], x: f64, x0: f64) -> f64 {
    let dx = x - x0;
    coefficients
        .iter()
        .zip(0i32..)
        .map(|(&c, k)| c * dx.powi(k))
        .sum()
}

/// First `terms` terms of the Maclaurin series of `e^x`.
///
/// This is what a truncated hardware evaluator converges to, not `x.exp()`.
pub fn exp_series(x: f64, terms: u32) -> f64 {
    (0..terms)
        .map(|k| x.powi(k as i32) / factorial(k))
        .sum()
}

/// Function the harness compares a run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedFn {
    /// The configured coefficients evaluated in floating point.
    #[default]
    Polynomial,
    /// `(x - x0)^2`.
    Square,
    /// The `order + 1` term exponential series in `x - x0`.
    ExpSeries,
}

impl ExpectedFn {
    /// Expected real output for input `x`.
    ///
    /// # Arguments
    ///
    /// * `x`            - Real input.
    /// * `x0`           - Real expansion point.
    /// * `coefficients` - Real coefficients `c0..=c_order`.
    pub fn evaluate(self, x: f64, x0: f64, coefficients: &[f64]) -> f64 {
        match self {
            Self::Polynomial => taylor_sum(coefficients, x, x0),
            Self::Square => (x - x0).powi(2),
            Self::ExpSeries => exp_series(x - x0, coefficients.len() as u32),
        }
    }
}
