//! Fast doubling.
//!
//! F(2k) = F(k) * (2*F(k+1) - F(k)), F(2k+1) = F(k)^2 + F(k+1)^2, descending
//! over the bits of n.

use crate::require_index;
use fibbench_core::{Technique, TechniqueError};
use num_bigint::BigUint;

/// Compute (F(n), F(n+1)).
pub(crate) fn fib_pair(n: u64) -> (BigUint, BigUint) {
    if n == 0 {
        return (BigUint::from(0u8), BigUint::from(1u8));
    }
    let (a, b) = fib_pair(n >> 1);
    // 2*F(k+1) - F(k) is non-negative since F(k+1) >= F(k).
    let c = &a * ((&b << 1) - &a);
    let d = &a * &a + &b * &b;
    if n & 1 == 0 {
        (c, d)
    } else {
        let next = &c + &d;
        (d, next)
    }
}

/// O(log n) fast doubling over the identities above.
#[derive(Debug, Default)]
pub struct FastDoubling;

impl FastDoubling {
    /// Create the technique.
    pub fn new() -> Self {
        Self
    }
}

impl Technique for FastDoubling {
    fn name(&self) -> &str {
        "Fast Doubling"
    }

    fn description(&self) -> &str {
        "Doubling identities descending over the bits of n"
    }

    fn time_complexity(&self) -> &str {
        "O(log n)"
    }

    fn space_complexity(&self) -> &str {
        "O(log n)"
    }

    fn calculate(&mut self, n: i64) -> Result<BigUint, TechniqueError> {
        let n = require_index(n)?;
        Ok(fib_pair(n).0)
    }
}
