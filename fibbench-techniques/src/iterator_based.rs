//! Iterator-based technique - the sequence as a lazy stream.

use crate::require_index;
use fibbench_core::{Technique, TechniqueError};
use num_bigint::BigUint;

/// Infinite iterator over the Fibonacci sequence, starting at F(0).
#[derive(Debug)]
pub struct FibonacciSequence {
    a: BigUint,
    b: BigUint,
}

impl FibonacciSequence {
    /// Start the sequence at F(0) = 0.
    pub fn new() -> Self {
        Self {
            a: BigUint::from(0u8),
            b: BigUint::from(1u8),
        }
    }
}

impl Default for FibonacciSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibonacciSequence {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let current = self.a.clone();
        let next = &self.a + &self.b;
        self.a = std::mem::replace(&mut self.b, next);
        Some(current)
    }
}

/// Advances a lazy sequence to the nth element.
#[derive(Debug, Default)]
pub struct IteratorBased;

impl IteratorBased {
    /// Create the technique.
    pub fn new() -> Self {
        Self
    }
}

impl Technique for IteratorBased {
    fn name(&self) -> &str {
        "Iterator Based"
    }

    fn description(&self) -> &str {
        "Lazy sequence iterator advanced to the nth element"
    }

    fn time_complexity(&self) -> &str {
        "O(n)"
    }

    fn space_complexity(&self) -> &str {
        "O(1)"
    }

    fn calculate(&mut self, n: i64) -> Result<BigUint, TechniqueError> {
        let n = require_index(n)? as usize;
        FibonacciSequence::new()
            .nth(n)
            .ok_or_else(|| TechniqueError::Other("sequence ended unexpectedly".to_string()))
    }
}
