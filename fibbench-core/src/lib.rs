#![warn(missing_docs)]
//! fibbench core - benchmark execution and timing engine
//!
//! This crate provides the measurement machinery for Fibonacci technique
//! benchmarking:
//! - `PrecisionTimer` runs a calculation under a wall-clock deadline and
//!   classifies failures into a closed taxonomy
//! - `BenchmarkRunner` sequences setup → timed run → teardown per technique
//!   and aggregates results into a summary
//! - a checkpoint-table validator with an independent reference computation
//! - the `Technique` / `TechniqueLoader` collaborator traits

mod error;
mod result;
mod runner;
mod technique;
mod timing;
mod validate;

pub use error::TechniqueError;
pub use result::{BenchmarkResult, BenchmarkSummary};
pub use runner::{BenchmarkRunner, RunnerConfig};
pub use technique::{Technique, TechniqueLoader};
pub use timing::{Failure, PrecisionTimer, TimingOutcome};
pub use validate::{
    checkpoint_indices, known_fibonacci, reference_fibonacci, validate_result,
    validate_technique,
};
