//! Naive recursive strategy.
//!
//! Applies F(n) = F(n-1) + F(n-2) directly with two calls per level and no
//! caching, so the cost is exponential in n. The input domain is bounded by
//! a configurable limit; larger indices are rejected up front with
//! `FibError::ResourceExhausted` rather than running unbounded.
//!
//! The limit never exceeds `MAX_RECURSION_LIMIT`, which keeps both the run
//! time bounded and the recursion on native `u64` values.

use num_bigint::BigUint;

use crate::calculator::{CoreCalculator, FibError};
use crate::constants::{DEFAULT_RECURSION_LIMIT, MAX_RECURSION_LIMIT};

/// Naive recursive calculator with a bounded input domain.
pub struct RecursiveFibonacci {
    max_index: u64,
}

impl RecursiveFibonacci {
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_RECURSION_LIMIT)
    }

    /// Create a calculator accepting indices up to and including `max_index`
    /// (capped at `MAX_RECURSION_LIMIT`).
    #[must_use]
    pub fn with_limit(max_index: u64) -> Self {
        Self {
            max_index: max_index.min(MAX_RECURSION_LIMIT),
        }
    }

    /// Largest accepted index.
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.max_index
    }
}

impl Default for RecursiveFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

fn recurse(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    recurse(n - 1) + recurse(n - 2)
}

impl CoreCalculator for RecursiveFibonacci {
    fn calculate_core(&self, n: u64) -> Result<BigUint, FibError> {
        if n > self.max_index {
            tracing::warn!(n, limit = self.max_index, "recursion guard tripped");
            return Err(FibError::ResourceExhausted {
                n,
                limit: self.max_index,
            });
        }
        Ok(BigUint::from(recurse(n)))
    }

    fn name(&self) -> &'static str {
        "Recursive"
    }
}
