//! Pipeline Unit and Latch Interfaces.
//!
//! This module defines the common traits for pipeline components. It provides:
//! 1. **Clocked Unit Interface:** Standardizes the per-cycle `tick` and asynchronous `reset`.
//! 2. **Pipeline Latch Interface:** Provides methods for flushing and validity checks.

use crate::fixed::FixedFormat;

/// A synchronous unit with a fixed input-to-output latency.
///
/// The verification harness drives any implementor one clock edge at a time
/// and aligns its expectations using [`latency`](Self::latency).
pub trait ClockedUnit {
    /// Clock edges from presenting an input to its result becoming valid,
    /// counting the edge that captures the input.
    ///
    /// Must be at least 1; the harness rejects a zero-latency unit with
    /// [`HarnessError::ZeroLatency`](crate::common::HarnessError::ZeroLatency).
    fn latency(&self) -> usize;

    /// Fixed-point format of the unit's input and output ports.
    fn format(&self) -> FixedFormat;

    /// Advances one clock edge.
    ///
    /// # Arguments
    ///
    /// * `valid_in` - Input handshake; `x_in` is ignored downstream when false.
    /// * `x_in`     - Input sample in the unit's fixed-point format.
    ///
    /// # Returns
    ///
    /// `(valid_out, y_out)` as registered after this edge.
    fn tick(&mut self, valid_in: bool, x_in: i64) -> (bool, i64);

    /// Asynchronous reset: discards every in-flight sample immediately.
    fn reset(&mut self);
}

/// Represents a pipeline latch (inter-stage register).
pub trait PipelineLatch {
    /// Clears the latch to its reset value.
    fn flush(&mut self);

    /// Checks whether the latch holds valid data.
    fn is_valid(&self) -> bool;
}
