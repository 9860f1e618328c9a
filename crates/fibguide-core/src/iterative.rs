//! Iterative strategy, the reference implementation.
//!
//! Advances the pair (F(k-1), F(k)) from (0, 1) forward n-1 times.
//! Linear time, constant auxiliary space.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::calculator::{CoreCalculator, FibError};

/// Compute F(n) by advancing a running pair.
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    if n == 0 {
        return BigUint::zero();
    }
    let mut prev = BigUint::zero();
    let mut curr = BigUint::one();
    for _ in 1..n {
        let next = &prev + &curr;
        prev = std::mem::replace(&mut curr, next);
    }
    curr
}

/// Iterative calculator.
pub struct IterativeFibonacci;

impl IterativeFibonacci {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for IterativeFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for IterativeFibonacci {
    fn calculate_core(&self, n: u64) -> Result<BigUint, FibError> {
        Ok(fibonacci(n))
    }

    fn name(&self) -> &'static str {
        "Iterative"
    }
}
