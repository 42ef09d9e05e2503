//! Evaluator pipeline implementation.
//!
//! This module contains the model of the `order + 1` stage Horner pipeline.
//! It includes the following components:
//! 1. **Horner:** The clocked evaluator state machine.
//! 2. **Latches:** Per-stage `(dx, acc, valid)` registers.
//! 3. **Traits:** Common interfaces for clocked units and latches.

/// Pipelined Horner evaluator.
pub mod horner;

/// Per-stage pipeline registers.
pub mod latches;

/// Traits for clocked units and pipeline latches.
pub mod traits;

pub use horner::HornerPipeline;
pub use latches::StageLatch;
pub use traits::{ClockedUnit, PipelineLatch};
