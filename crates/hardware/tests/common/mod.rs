//! Shared stimulus builders and drivers.

use taylorsim_core::core::HornerPipeline;
use taylorsim_core::fixed::FixedFormat;

/// 1.0 in Q15.16.
pub const FP_1: i64 = 65536;

/// Coefficients of f(x) = x^2 in Q15.16.
pub const SQUARE: [i64; 3] = [0, 0, FP_1];

/// Coefficients of the 5-term e^x series in Q15.16 (1, 1, 1/2, 1/6, 1/24).
pub const EXP5: [i64; 5] = [65536, 65536, 32768, 10923, 2731];

/// Routes `tracing` output through the test harness's captured writer.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("taylorsim_core=trace")
        .try_init();
}

/// Builds a Q15.16 pipeline expanded around zero.
pub fn q16_pipeline(order: usize, coefficients: &[i64]) -> HornerPipeline {
    init_tracing();
    HornerPipeline::new(coefficients, order, 0, FixedFormat::default()).unwrap()
}

/// Clocks `dut` once per stimulus entry and returns every `(valid_out, y_out)`.
pub fn drive(dut: &mut HornerPipeline, stimulus: &[(bool, i64)]) -> Vec<(bool, i64)> {
    stimulus
        .iter()
        .map(|&(valid, x)| dut.clock(valid, x))
        .collect()
}

/// Clocks `dut` with `valid_in` low for `cycles` edges.
pub fn drain(dut: &mut HornerPipeline, cycles: usize) -> Vec<(bool, i64)> {
    (0..cycles).map(|_| dut.clock(false, 0)).collect()
}

/// Indices of the edges on which the output was valid.
pub fn valid_edges(outputs: &[(bool, i64)]) -> Vec<usize> {
    outputs
        .iter()
        .enumerate()
        .filter_map(|(i, &(valid, _))| valid.then_some(i))
        .collect()
}

/// Feeds a single valid sample, drains the pipeline and returns the one valid result.
pub fn evaluate_one(dut: &mut HornerPipeline, x: i64) -> i64 {
    let latency = dut.latency();
    let mut outputs = vec![dut.clock(true, x)];
    outputs.extend(drain(dut, latency));
    let valid: Vec<i64> = outputs.into_iter().filter(|o| o.0).map(|o| o.1).collect();
    assert_eq!(valid.len(), 1, "expected exactly one valid output");
    valid[0]
}
