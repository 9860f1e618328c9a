//! Matrix Exponentiation strategy.
//!
//! Computes F(n) as the top-right entry of Q^n where Q = [[1,1],[1,0]],
//! using O(log n) matrix products.

use num_bigint::BigUint;

use crate::calculator::{CoreCalculator, FibError};
use crate::matrix_types::Matrix;

/// Matrix Exponentiation calculator.
pub struct MatrixFibonacci;

impl MatrixFibonacci {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for MatrixFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for MatrixFibonacci {
    fn calculate_core(&self, n: u64) -> Result<BigUint, FibError> {
        Ok(Matrix::fibonacci_q().pow(n).b)
    }

    fn name(&self) -> &'static str {
        "MatrixExponentiation"
    }
}
