//! The `Technique` trait - the uniform contract every Fibonacci
//! calculation strategy exposes to the benchmark engine.
//!
//! The engine treats implementations as opaque callables with declared
//! complexity metadata. Lifecycle hooks default to no-ops so a technique
//! only overrides what it needs (e.g. a memoized technique clearing its
//! cache in `setup` for fairness between runs).

use crate::error::TechniqueError;
use num_bigint::BigUint;

/// One pluggable Fibonacci calculation strategy.
pub trait Technique: Send {
    /// Display name, unique and non-empty. Used as the merge key across
    /// reporting, and for case-insensitive lookup.
    fn name(&self) -> &str;

    /// One-line description of the algorithm.
    fn description(&self) -> &str;

    /// Big-O time complexity label (free text, displayed only).
    fn time_complexity(&self) -> &str;

    /// Big-O space complexity label (free text, displayed only).
    fn space_complexity(&self) -> &str;

    /// Calculate the nth Fibonacci number.
    ///
    /// Must satisfy `calculate(0) == 0` and `calculate(1) == 1`, and fail
    /// with [`TechniqueError::InvalidArgument`] when `n < 0`.
    fn calculate(&mut self, n: i64) -> Result<BigUint, TechniqueError>;

    /// Called once before the timed run. A failure here skips the run.
    fn setup(&mut self) -> Result<(), TechniqueError> {
        Ok(())
    }

    /// Called once after the timed run. Failures are swallowed by the
    /// orchestrator and never affect the result.
    fn teardown(&mut self) -> Result<(), TechniqueError> {
        Ok(())
    }

    /// Whether this technique can practically handle n > 1000.
    fn supports_large_n(&self) -> bool {
        true
    }

    /// Maximum recommended n, if the technique has a practical ceiling.
    fn max_recommended_n(&self) -> Option<i64> {
        None
    }
}

/// Supplies an ordered list of techniques to the orchestrator.
///
/// Discovery is deliberately external to the engine: implementations are an
/// explicit compile-time registry, never filesystem scanning. The engine
/// preserves whatever order the loader returns.
pub trait TechniqueLoader {
    /// All available techniques, in registration order.
    fn load(&self) -> Vec<Box<dyn Technique>>;

    /// Case-insensitive lookup by display name.
    fn by_name(&self, name: &str) -> Option<Box<dyn Technique>> {
        self.load()
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }
}
