#![warn(missing_docs)]
//! Fibonacci calculation techniques.
//!
//! Each technique implements the [`Technique`] trait from `fibbench-core`
//! with declared complexity metadata. Discovery is an explicit compile-time
//! registry, never filesystem scanning: [`all_techniques`] returns the suite
//! in registration order and [`Registry`] exposes it as a loader.

mod binet;
mod dynamic_programming;
mod fast_doubling;
mod iterative;
mod iterator_based;
mod matrix;
mod memoized;
mod naive;
mod parallel;

pub use binet::BinetFormula;
pub use dynamic_programming::DynamicProgramming;
pub use fast_doubling::FastDoubling;
pub use iterative::IterativeSpaceOptimized;
pub use iterator_based::IteratorBased;
pub use matrix::MatrixExponentiation;
pub use memoized::MemoizedRecursion;
pub use naive::NaiveRecursion;
pub use parallel::ParallelFastDoubling;

use fibbench_core::{Technique, TechniqueError, TechniqueLoader};

/// Recursion depth guard for the recursive techniques, mirroring a typical
/// interpreter call-stack limit.
pub(crate) const RECURSION_LIMIT: usize = 1000;

/// Reject negative indices before any calculation begins.
pub(crate) fn require_index(n: i64) -> Result<u64, TechniqueError> {
    if n < 0 {
        Err(TechniqueError::InvalidArgument(n))
    } else {
        Ok(n as u64)
    }
}

/// All techniques in registration order.
pub fn all_techniques() -> Vec<Box<dyn Technique>> {
    vec![
        Box::new(NaiveRecursion::new()),
        Box::new(MemoizedRecursion::new()),
        Box::new(DynamicProgramming::new()),
        Box::new(MatrixExponentiation::new()),
        Box::new(BinetFormula::new()),
        Box::new(IteratorBased::new()),
        Box::new(IterativeSpaceOptimized::new()),
        Box::new(FastDoubling::new()),
        Box::new(ParallelFastDoubling::new()),
    ]
}

/// Compile-time technique registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct Registry;

impl Registry {
    /// Create the registry.
    pub fn new() -> Self {
        Self
    }
}

impl TechniqueLoader for Registry {
    fn load(&self) -> Vec<Box<dyn Technique>> {
        all_techniques()
    }
}
