//! Naive recursion - the textbook definition, exponential time.

use crate::{require_index, RECURSION_LIMIT};
use fibbench_core::{Technique, TechniqueError};
use num_bigint::BigUint;

/// Direct recursive implementation with no caching.
#[derive(Debug, Default)]
pub struct NaiveRecursion;

impl NaiveRecursion {
    /// Create the technique.
    pub fn new() -> Self {
        Self
    }
}

fn fib(n: u64) -> BigUint {
    if n < 2 {
        BigUint::from(n)
    } else {
        fib(n - 1) + fib(n - 2)
    }
}

impl Technique for NaiveRecursion {
    fn name(&self) -> &str {
        "Naive Recursion"
    }

    fn description(&self) -> &str {
        "Direct recursive definition F(n) = F(n-1) + F(n-2) with no caching"
    }

    fn time_complexity(&self) -> &str {
        "O(2^n)"
    }

    fn space_complexity(&self) -> &str {
        "O(n)"
    }

    fn calculate(&mut self, n: i64) -> Result<BigUint, TechniqueError> {
        let n = require_index(n)?;
        if n as usize > RECURSION_LIMIT {
            return Err(TechniqueError::RecursionLimit {
                limit: RECURSION_LIMIT,
            });
        }
        Ok(fib(n))
    }

    fn supports_large_n(&self) -> bool {
        false
    }

    fn max_recommended_n(&self) -> Option<i64> {
        Some(35)
    }
}
