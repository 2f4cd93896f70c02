//! Bottom-up dynamic programming.

use crate::require_index;
use fibbench_core::{Technique, TechniqueError};
use num_bigint::BigUint;

/// Fills a table from the bottom up and returns the last entry.
#[derive(Debug, Default)]
pub struct DynamicProgramming;

impl DynamicProgramming {
    /// Create the technique.
    pub fn new() -> Self {
        Self
    }
}

impl Technique for DynamicProgramming {
    fn name(&self) -> &str {
        "Dynamic Programming"
    }

    fn description(&self) -> &str {
        "Bottom-up table construction from F(0) to F(n)"
    }

    fn time_complexity(&self) -> &str {
        "O(n)"
    }

    fn space_complexity(&self) -> &str {
        "O(n)"
    }

    fn calculate(&mut self, n: i64) -> Result<BigUint, TechniqueError> {
        let n = require_index(n)? as usize;
        let mut table = Vec::with_capacity(n + 1);
        table.push(BigUint::from(0u8));
        if n >= 1 {
            table.push(BigUint::from(1u8));
        }
        for i in 2..=n {
            let next = &table[i - 1] + &table[i - 2];
            table.push(next);
        }
        Ok(table.swap_remove(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_values() {
        let mut t = DynamicProgramming::new();
        assert_eq!(t.calculate(0).unwrap(), BigUint::from(0u8));
        assert_eq!(t.calculate(2).unwrap(), BigUint::from(1u8));
        assert_eq!(t.calculate(40).unwrap(), BigUint::from(102334155u32));
    }
}
