//! Space-optimized iteration - two rolling values.

use crate::require_index;
use fibbench_core::{Technique, TechniqueError};
use num_bigint::BigUint;

/// Linear iteration keeping only the last two values.
#[derive(Debug, Default)]
pub struct IterativeSpaceOptimized;

impl IterativeSpaceOptimized {
    /// Create the technique.
    pub fn new() -> Self {
        Self
    }
}

impl Technique for IterativeSpaceOptimized {
    fn name(&self) -> &str {
        "Iterative (Space Optimized)"
    }

    fn description(&self) -> &str {
        "Linear iteration carrying only the previous two values"
    }

    fn time_complexity(&self) -> &str {
        "O(n)"
    }

    fn space_complexity(&self) -> &str {
        "O(1)"
    }

    fn calculate(&mut self, n: i64) -> Result<BigUint, TechniqueError> {
        let n = require_index(n)?;
        let mut a = BigUint::from(0u8);
        let mut b = BigUint::from(1u8);
        for _ in 0..n {
            let next = &a + &b;
            a = b;
            b = next;
        }
        Ok(a)
    }
}
