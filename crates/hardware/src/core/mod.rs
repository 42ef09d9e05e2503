//! Hardware core models.
//!
//! This module contains the clocked datapath models driven by the
//! verification harness.

/// Evaluator pipeline implementation (Horner stages, latches, traits).
pub mod pipeline;

pub use self::pipeline::{ClockedUnit, HornerPipeline};
