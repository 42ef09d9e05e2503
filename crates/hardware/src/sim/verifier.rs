//! Verification harness.
//!
//! Drives a [`ClockedUnit`] with a stimulus vector exactly as the hardware
//! testbench does and checks every valid output against its expected value:
//! 1. **Stimulus:** One real input per clock edge, converted to fixed point.
//! 2. **Drain:** `latency` further edges with `valid_in` low and `x_in = 0`.
//! 3. **Alignment:** A [`DelayLine`] of length `latency` carries each
//!    `(input, expected)` pair alongside the sample inside the unit.
//! 4. **Comparison:** `|got - expected| <= tolerance_lsb / 2^frac_bits`.
//!
//! A mismatch is counted and reported, never fatal; every cycle still runs.

use tracing::{debug, warn};

use super::delay_line::DelayLine;
use super::report::{CheckRecord, ReportSink, RunOutcome};
use crate::common::error::{HarnessError, PipelineError};
use crate::config::{Config, RunSpec};
use crate::core::ClockedUnit;
use crate::fixed::FixedFormat;
use crate::stats::VerifyStats;

/// Runs verification passes and accumulates their results.
#[derive(Debug)]
pub struct Verifier<S> {
    sink: S,
    stats: VerifyStats,
}

impl<S: ReportSink> Verifier<S> {
    /// Creates a verifier reporting to `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            stats: VerifyStats::default(),
        }
    }

    /// Verifies `dut` against `expected`.
    ///
    /// The unit is reset first, then clocked `inputs.len() + latency` times.
    ///
    /// # Arguments
    ///
    /// * `dut`           - Unit under test.
    /// * `inputs`        - Real inputs, one per clock edge.
    /// * `expected`      - Expected real output for each input.
    /// * `label`         - Prefix for every reported comparison.
    /// * `tolerance_lsb` - Allowed error in least-significant bits.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::LengthMismatch`] if `inputs` and `expected`
    /// differ in length, or [`HarnessError::ZeroLatency`] if the unit reports
    /// a latency of zero. Output mismatches are not errors.
    pub fn run<U: ClockedUnit + ?Sized>(
        &mut self,
        dut: &mut U,
        inputs: &[f64],
        expected: &[f64],
        label: &str,
        tolerance_lsb: u32,
    ) -> Result<RunOutcome, HarnessError> {
        if inputs.len() != expected.len() {
            return Err(HarnessError::LengthMismatch {
                inputs: inputs.len(),
                expected: expected.len(),
            });
        }

        let latency = dut.latency();
        if latency == 0 {
            return Err(HarnessError::ZeroLatency);
        }

        let fmt = dut.format();
        let tolerance = fmt.tolerance(tolerance_lsb);
        let mut outcome = RunOutcome {
            label: label.to_owned(),
            latency,
            ..RunOutcome::default()
        };

        dut.reset();
        self.sink.on_run_start(label, latency);
        debug!(label, latency, samples = inputs.len(), %fmt, "run start");

        let mut in_flight = DelayLine::new(latency, (0.0, 0.0));
        for cycle in 0..inputs.len() + latency {
            let (valid_in, x_in, presented) = match inputs.get(cycle).zip(expected.get(cycle)) {
                Some((&x, &want)) => (true, fmt.from_real(x), (x, want)),
                None => (false, 0, (0.0, 0.0)),
            };
            let &(x, want) = in_flight.shift(presented);

            let (valid_out, y_out) = dut.tick(valid_in, x_in);
            outcome.cycles += 1;
            if !valid_out {
                continue;
            }

            let record = Self::check(fmt, cycle, label, x, y_out, want, tolerance);
            if record.passed {
                outcome.passed += 1;
            } else {
                outcome.failed += 1;
                warn!(
                    label = %record.label,
                    cycle,
                    got = record.got,
                    expected = record.expected,
                    error = record.error,
                    "output outside tolerance"
                );
            }
            self.sink.on_check(&record);
        }

        debug!(
            label,
            passed = outcome.passed,
            failed = outcome.failed,
            cycles = outcome.cycles,
            "run end"
        );
        self.stats.record(&outcome);
        self.sink.on_run_end(&outcome);
        Ok(outcome)
    }

    /// Builds the evaluator for `spec` and verifies it against the run's
    /// reference function.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Pipeline`] if the evaluator cannot be built.
    pub fn run_spec(
        &mut self,
        format: FixedFormat,
        spec: &RunSpec,
    ) -> Result<RunOutcome, HarnessError> {
        let mut dut = spec.build_pipeline(format)?;
        let expected = spec.expected_values(format);
        self.run(
            &mut dut,
            &spec.inputs,
            &expected,
            &spec.label,
            spec.tolerance_lsb,
        )
    }

    /// Runs every entry of `config` in order.
    ///
    /// # Errors
    ///
    /// Returns the first construction error; runs before it have completed
    /// and are included in [`stats`](Self::stats).
    pub fn run_config(&mut self, config: &Config) -> Result<Vec<RunOutcome>, HarnessError> {
        let format = config.format.to_format().map_err(PipelineError::from)?;
        config
            .runs
            .iter()
            .map(|spec| self.run_spec(format, spec))
            .collect()
    }

    /// Totals across every run so far.
    pub const fn stats(&self) -> &VerifyStats {
        &self.stats
    }

    /// The reporting sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the verifier, returning the sink and the totals.
    pub fn into_parts(self) -> (S, VerifyStats) {
        (self.sink, self.stats)
    }

    fn check(
        fmt: FixedFormat,
        cycle: usize,
        label: &str,
        input: f64,
        raw: i64,
        expected: f64,
        tolerance: f64,
    ) -> CheckRecord {
        let got = fmt.to_real(raw);
        let error = (got - expected).abs();
        CheckRecord {
            cycle: cycle as u64,
            label: format!("{label}  x={input:.3}"),
            input,
            raw,
            got,
            expected,
            error,
            passed: error <= tolerance,
        }
    }
}
