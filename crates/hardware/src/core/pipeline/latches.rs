//! Pipeline stage registers.
//!
//! Each Horner stage owns one [`StageLatch`]: the delta `x - x0` shifted along
//! with the data, the partial Horner accumulator, and the valid bit that
//! travels in lockstep with them.

use super::traits::PipelineLatch;

/// Register triple held by one pipeline stage.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct StageLatch {
    /// Input delta `x_in - x0`, forwarded unchanged from stage to stage.
    pub dx: i64,
    /// Partial Horner sum for the sample occupying this stage.
    pub acc: i64,
    /// Whether this stage holds a sample presented with `valid_in` asserted.
    pub valid: bool,
}

impl StageLatch {
    /// Creates a latch value.
    #[inline]
    pub const fn new(dx: i64, acc: i64, valid: bool) -> Self {
        Self { dx, acc, valid }
    }
}

impl PipelineLatch for StageLatch {
    fn flush(&mut self) {
        *self = Self::default();
    }

    fn is_valid(&self) -> bool {
        self.valid
    }
}
