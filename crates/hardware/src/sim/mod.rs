//! Verification harness.
//!
//! Everything that drives the evaluator and judges its outputs:
//! 1. **Delay Line:** Keeps expectations aligned with the pipeline latency.
//! 2. **Reference:** Floating-point models for expected values.
//! 3. **Report:** The injectable sink that receives results.
//! 4. **Verifier:** The stimulus/drain/compare loop.

/// Fixed-length delay line.
pub mod delay_line;

/// Floating-point reference models.
pub mod reference;

/// Reporting sink interface and built-in sinks.
pub mod report;

/// The verification loop.
pub mod verifier;

pub use delay_line::DelayLine;
pub use reference::ExpectedFn;
pub use report::{CheckRecord, NullSink, RecordingSink, ReportSink, RunOutcome};
pub use verifier::Verifier;
