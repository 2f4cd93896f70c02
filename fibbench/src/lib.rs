#![warn(missing_docs)]
//! # FibBench
//!
//! Benchmark suite comparing Fibonacci calculation techniques under a fixed
//! time budget:
//! - **Deadline Timing**: each technique climbs the sequence for a wall-clock
//!   budget; throughput is calculations per second
//! - **Closed Failure Taxonomy**: recursion limits, overflow, memory
//!   exhaustion, and panics degrade to failed result rows, never a crashed
//!   batch
//! - **Checkpoint Validation**: every produced value is checked against a
//!   known-value table; unknown indices pass
//! - **Compile-Time Registry**: techniques are registered explicitly, no
//!   runtime discovery
//!
//! ## Quick Start
//!
//! ```no_run
//! use fibbench::prelude::*;
//!
//! let runner = BenchmarkRunner::with_loader(
//!     RunnerConfig::default(),
//!     Box::new(Registry::new()),
//! );
//! let summary = runner.run_all(None);
//! for result in &summary.results {
//!     println!("{}: {}/s", result.technique_name, result.rate());
//! }
//! ```

// Re-export core types
pub use fibbench_core::{
    BenchmarkResult, BenchmarkRunner, BenchmarkSummary, Failure, PrecisionTimer, RunnerConfig,
    Technique, TechniqueError, TechniqueLoader, TimingOutcome, checkpoint_indices,
    known_fibonacci, reference_fibonacci, validate_result, validate_technique,
};

// Re-export the technique suite
pub use fibbench_techniques::{
    BinetFormula, DynamicProgramming, FastDoubling, IterativeSpaceOptimized, IteratorBased,
    MatrixExponentiation, MemoizedRecursion, NaiveRecursion, ParallelFastDoubling, Registry,
    all_techniques,
};

// Re-export report generation
pub use fibbench_report::{
    OutputFormat, format_human_output, generate_csv_report, generate_json_report,
};

// Techniques speak BigUint; re-exported so callers need no direct num-bigint
// dependency.
pub use num_bigint::BigUint;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BenchmarkResult, BenchmarkRunner, BenchmarkSummary, BigUint, OutputFormat, Registry,
        RunnerConfig, Technique, TechniqueError, TechniqueLoader, all_techniques,
    };
}

/// Run the FibBench CLI harness.
///
/// Call this from a binary's `main()`:
/// ```ignore
/// fn main() {
///     fibbench::run().unwrap();
/// }
/// ```
pub use fibbench_cli::run;
