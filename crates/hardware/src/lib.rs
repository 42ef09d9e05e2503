//! Pipelined Taylor polynomial evaluator model.
//!
//! This crate implements a cycle-accurate, bit-accurate model of a fixed-point
//! Horner pipeline and the harness that verifies it:
//! 1. **Fixed Point:** Masking, two's-complement reinterpretation, wrapping add and truncating multiply.
//! 2. **Core:** The `order + 1` stage evaluator with per-stage data and valid registers.
//! 3. **Simulation:** Stimulus, delay-line alignment, tolerance checks and reporting sinks.
//! 4. **Configuration:** JSON run descriptions and the built-in demonstrations.
//! 5. **Statistics:** Pass/fail totals and the process exit status.

/// Common types and constants (errors, format limits, defaults).
pub mod common;
/// Run configuration (format, run descriptions, built-in demonstrations).
pub mod config;
/// Clocked datapath models (Horner pipeline, latches, traits).
pub mod core;
/// Fixed-point arithmetic layer.
pub mod fixed;
/// Verification harness (delay line, reference models, sinks, verifier).
pub mod sim;
/// Verification statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::builtin()` or deserialize from JSON.
pub use crate::config::Config;
/// The pipelined evaluator; construct with `HornerPipeline::new`.
pub use crate::core::HornerPipeline;
/// Validated fixed-point format.
pub use crate::fixed::FixedFormat;
/// Verification harness entry point.
pub use crate::sim::Verifier;
