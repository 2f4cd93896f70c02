//! Matrix exponentiation.
//!
//! [[1,1],[1,0]]^n = [[F(n+1), F(n)], [F(n), F(n-1)]], computed by binary
//! exponentiation.

use crate::require_index;
use fibbench_core::{Technique, TechniqueError};
use num_bigint::BigUint;

/// 2x2 matrix over BigUint.
#[derive(Debug, Clone)]
struct Mat2 {
    m00: BigUint,
    m01: BigUint,
    m10: BigUint,
    m11: BigUint,
}

impl Mat2 {
    fn identity() -> Self {
        Self {
            m00: BigUint::from(1u8),
            m01: BigUint::from(0u8),
            m10: BigUint::from(0u8),
            m11: BigUint::from(1u8),
        }
    }

    fn fibonacci_base() -> Self {
        Self {
            m00: BigUint::from(1u8),
            m01: BigUint::from(1u8),
            m10: BigUint::from(1u8),
            m11: BigUint::from(0u8),
        }
    }

    fn mul(&self, other: &Self) -> Self {
        Self {
            m00: &self.m00 * &other.m00 + &self.m01 * &other.m10,
            m01: &self.m00 * &other.m01 + &self.m01 * &other.m11,
            m10: &self.m10 * &other.m00 + &self.m11 * &other.m10,
            m11: &self.m10 * &other.m01 + &self.m11 * &other.m11,
        }
    }

    fn pow(mut self, mut exp: u64) -> Self {
        let mut acc = Mat2::identity();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.mul(&self);
            }
            self = self.mul(&self);
            exp >>= 1;
        }
        acc
    }
}

/// Binary exponentiation of the Fibonacci Q-matrix.
#[derive(Debug, Default)]
pub struct MatrixExponentiation;

impl MatrixExponentiation {
    /// Create the technique.
    pub fn new() -> Self {
        Self
    }
}

impl Technique for MatrixExponentiation {
    fn name(&self) -> &str {
        "Matrix Exponentiation"
    }

    fn description(&self) -> &str {
        "Binary exponentiation of the 2x2 Fibonacci matrix"
    }

    fn time_complexity(&self) -> &str {
        "O(log n)"
    }

    fn space_complexity(&self) -> &str {
        "O(1)"
    }

    fn calculate(&mut self, n: i64) -> Result<BigUint, TechniqueError> {
        let n = require_index(n)?;
        if n == 0 {
            return Ok(BigUint::from(0u8));
        }
        Ok(Mat2::fibonacci_base().pow(n).m01)
    }
}
