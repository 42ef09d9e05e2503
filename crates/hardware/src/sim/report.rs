//! Verification reporting.
//!
//! The harness never prints. Every comparison and run boundary is handed to a
//! [`ReportSink`], so the model runs headless in tests and the binary decides
//! how results are rendered.

/// Outcome of a single output comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckRecord {
    /// Harness cycle on which the output was valid (0-based).
    pub cycle: u64,
    /// Run label followed by the originating input, e.g. `"x^2  x=3.000"`.
    pub label: String,
    /// Real input that produced this output.
    pub input: f64,
    /// Raw output register value.
    pub raw: i64,
    /// Output converted to a real number.
    pub got: f64,
    /// Expected real value.
    pub expected: f64,
    /// Absolute error `|got - expected|`.
    pub error: f64,
    /// Whether `error` is within tolerance.
    pub passed: bool,
}

/// Tally for one verification run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Run label.
    pub label: String,
    /// Latency of the unit under test.
    pub latency: usize,
    /// Comparisons within tolerance.
    pub passed: u64,
    /// Comparisons outside tolerance.
    pub failed: u64,
    /// Clock edges driven, including the drain cycles.
    pub cycles: u64,
}

impl RunOutcome {
    /// Total comparisons made.
    pub const fn checks(&self) -> u64 {
        self.passed + self.failed
    }

    /// Whether the run had no failing comparison.
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Receives verification events.
pub trait ReportSink {
    /// A run is about to start driving a unit with the given latency.
    fn on_run_start(&mut self, label: &str, latency: usize);

    /// A valid output was compared.
    fn on_check(&mut self, record: &CheckRecord);

    /// A run finished; all cycles, including the drain, have executed.
    fn on_run_end(&mut self, outcome: &RunOutcome);
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn on_run_start(&mut self, label: &str, latency: usize) {
        (**self).on_run_start(label, latency);
    }

    fn on_check(&mut self, record: &CheckRecord) {
        (**self).on_check(record);
    }

    fn on_run_end(&mut self, outcome: &RunOutcome) {
        (**self).on_run_end(outcome);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn on_run_start(&mut self, _label: &str, _latency: usize) {}

    fn on_check(&mut self, _record: &CheckRecord) {}

    fn on_run_end(&mut self, _outcome: &RunOutcome) {}
}

/// Keeps every event in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    /// Labels passed to `on_run_start`, in order.
    pub started: Vec<String>,
    /// Every comparison, in cycle order.
    pub records: Vec<CheckRecord>,
    /// Every finished run.
    pub outcomes: Vec<RunOutcome>,
}

impl RecordingSink {
    /// Records of failing comparisons.
    pub fn failures(&self) -> impl Iterator<Item = &CheckRecord> {
        self.records.iter().filter(|r| !r.passed)
    }
}

impl ReportSink for RecordingSink {
    fn on_run_start(&mut self, label: &str, _latency: usize) {
        self.started.push(label.to_owned());
    }

    fn on_check(&mut self, record: &CheckRecord) {
        self.records.push(record.clone());
    }

    fn on_run_end(&mut self, outcome: &RunOutcome) {
        self.outcomes.push(outcome.clone());
    }
}
