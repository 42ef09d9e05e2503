//! Pipelined Horner evaluator.
//!
//! Models an `order + 1` stage pipeline that evaluates
//! `c0 + c1*dx + c2*dx^2 + ... + c_order*dx^order` with `dx = x_in - x0`:
//! 1. **Stage 0:** Registers `dx` and seeds the accumulator with `c_order`.
//! 2. **Stage i:** Registers `c_{order-i} + dx * acc` from stage `i - 1`.
//! 3. **Valid Chain:** The valid bit shifts through the stages with the data.
//!
//! Every stage reads the *previous* cycle's value of the stage before it.
//! The model computes the complete next-state vector into a shadow buffer and
//! swaps it in as one commit, so no stage ever observes a value written in the
//! same cycle.

use tracing::{debug, trace};

use super::latches::StageLatch;
use super::traits::{ClockedUnit, PipelineLatch};
use crate::common::error::PipelineError;
use crate::fixed::FixedFormat;

/// Cycle-accurate model of the pipelined Taylor polynomial evaluator.
///
/// Accepts one sample per clock edge unconditionally (no backpressure) and
/// produces the result for that sample `order + 1` edges later, counting the
/// edge that captures it.
///
/// # Examples
///
/// ```
/// use taylorsim_core::core::HornerPipeline;
/// use taylorsim_core::fixed::FixedFormat;
///
/// // f(x) = x^2 in Q15.16
/// let mut dut = HornerPipeline::new(&[0, 0, 65536], 2, 0, FixedFormat::default()).unwrap();
/// assert_eq!(dut.clock(true, 196608), (false, 0));
/// let _ = dut.clock(false, 0);
/// assert_eq!(dut.clock(false, 0), (true, 589824));
/// ```
#[derive(Clone, Debug)]
pub struct HornerPipeline {
    /// `c0..=c_order`.
    coefficients: Vec<i64>,
    order: usize,
    x0: i64,
    format: FixedFormat,
    /// Committed stage registers, index 0 is the input stage.
    stages: Vec<StageLatch>,
    /// Next-state buffer, swapped with `stages` on every clock edge.
    shadow: Vec<StageLatch>,
    /// Clock edges since construction or the last reset.
    cycles: u64,
}

impl HornerPipeline {
    /// Creates an evaluator in its reset state.
    ///
    /// Only `coefficients[0..=order]` are kept; extra entries are ignored, as
    /// with an oversized coefficient ROM.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - `c0, c1, ...` as raw register values in `format`.
    /// * `order`        - Polynomial degree; the pipeline has `order + 1` stages.
    /// * `x0`           - Expansion point as a raw register value.
    /// * `format`       - Register format shared by every stage.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::CoefficientsTooShort`] if fewer than
    /// `order + 1` coefficients are supplied.
    pub fn new(
        coefficients: &[i64],
        order: usize,
        x0: i64,
        format: FixedFormat,
    ) -> Result<Self, PipelineError> {
        let needed = order + 1;
        let Some(used) = coefficients.get(..needed) else {
            return Err(PipelineError::CoefficientsTooShort {
                order,
                needed,
                got: coefficients.len(),
            });
        };
        debug!(order, x0, %format, "horner pipeline constructed");
        Ok(Self {
            coefficients: used.iter().map(|&c| format.wrap(i128::from(c))).collect(),
            order,
            x0: format.wrap(i128::from(x0)),
            format,
            stages: vec![StageLatch::default(); needed],
            shadow: vec![StageLatch::default(); needed],
            cycles: 0,
        })
    }

    /// Validates a raw `(data_width, frac_bits)` pair and creates an evaluator.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Format`] for an invalid format, or
    /// [`PipelineError::CoefficientsTooShort`] as for [`new`](Self::new).
    pub fn with_params(
        coefficients: &[i64],
        order: usize,
        x0: i64,
        data_width: u32,
        frac_bits: u32,
    ) -> Result<Self, PipelineError> {
        let format = FixedFormat::new(data_width, frac_bits)?;
        Self::new(coefficients, order, x0, format)
    }

    /// Active-low asynchronous reset.
    ///
    /// Clears every stage to `(0, 0, invalid)` without waiting for a clock
    /// edge. Samples in flight are discarded.
    pub fn reset(&mut self) {
        debug!(in_flight = self.in_flight(), cycles = self.cycles, "pipeline reset");
        self.stages.iter_mut().for_each(PipelineLatch::flush);
        self.shadow.iter_mut().for_each(PipelineLatch::flush);
        self.cycles = 0;
    }

    /// Advances one rising clock edge.
    ///
    /// # Arguments
    ///
    /// * `valid_in` - Input handshake.
    /// * `x_in`     - Input sample as a raw register value.
    ///
    /// # Returns
    ///
    /// `(valid_out, y_out)`: the last stage after this edge's commit.
    pub fn clock(&mut self, valid_in: bool, x_in: i64) -> (bool, i64) {
        let fmt = self.format;

        // Stage 0 re-seeds from the top coefficient every cycle, regardless of
        // what it held before.
        self.shadow[0] = StageLatch::new(
            fmt.sub(x_in, self.x0),
            self.coefficients[self.order],
            valid_in,
        );

        // Stage i reads stage i-1 as committed on the previous edge and folds
        // in c_{order-i}.
        let feeds = self
            .stages
            .iter()
            .zip(self.coefficients[..self.order].iter().rev());
        for (next, (prev, &coeff)) in self.shadow[1..].iter_mut().zip(feeds) {
            let product = fmt.mul(prev.dx, prev.acc);
            *next = StageLatch::new(prev.dx, fmt.add(coeff, product), prev.valid);
        }

        std::mem::swap(&mut self.stages, &mut self.shadow);
        self.cycles += 1;

        let out = self.stages[self.order];
        trace!(
            cycle = self.cycles,
            valid_in,
            x_in,
            valid_out = out.valid,
            y_out = out.acc,
            "clock"
        );
        (out.valid, out.acc)
    }

    /// Clock edges from input to valid output (`order + 1`).
    #[inline]
    pub const fn latency(&self) -> usize {
        self.order + 1
    }

    /// Polynomial degree.
    #[inline]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Expansion point as a raw register value.
    #[inline]
    pub const fn x0(&self) -> i64 {
        self.x0
    }

    /// Register format.
    #[inline]
    pub const fn format(&self) -> FixedFormat {
        self.format
    }

    /// Coefficients `c0..=c_order`.
    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// Committed stage registers, input stage first.
    pub fn stages(&self) -> &[StageLatch] {
        &self.stages
    }

    /// Clock edges since construction or the last reset.
    #[inline]
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Number of stages currently holding a valid sample.
    pub fn in_flight(&self) -> usize {
        self.stages.iter().filter(|s| s.is_valid()).count()
    }
}

impl ClockedUnit for HornerPipeline {
    fn latency(&self) -> usize {
        Self::latency(self)
    }

    fn format(&self) -> FixedFormat {
        self.format
    }

    fn tick(&mut self, valid_in: bool, x_in: i64) -> (bool, i64) {
        self.clock(valid_in, x_in)
    }

    fn reset(&mut self) {
        Self::reset(self);
    }
}
