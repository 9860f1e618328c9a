//! Calculator traits and the `FibCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by the benchmark harness and the CLI.
//! `CoreCalculator` is the internal trait implemented by each strategy.
//! `FibCalculator` is a decorator that validates the index and traces the call.

use std::sync::Arc;

use num_bigint::BigUint;

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// An index, count or modulus was out of its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input is valid but too large for the strategy's bounded depth.
    #[error("resource exhausted: F({n}) exceeds the recursion limit of {limit}")]
    ResourceExhausted {
        /// Requested index.
        n: u64,
        /// Largest index the strategy accepts.
        limit: u64,
    },

    /// The request would materialize more values than the table can hold.
    #[error("resource exhausted: {0}")]
    Capacity(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Results from different strategies don't match.
    #[error("result mismatch between strategies")]
    Mismatch,
}

impl FibError {
    /// Whether this error means "valid input, strategy unsuitable for this magnitude".
    #[must_use]
    pub fn is_resource_exhausted(&self) -> bool {
        matches!(self, Self::ResourceExhausted { .. } | Self::Capacity(_))
    }
}

/// Validate a signed index, rejecting negatives.
pub fn checked_index(n: i64) -> Result<u64, FibError> {
    u64::try_from(n)
        .map_err(|_| FibError::InvalidArgument(format!("n must be non-negative, got {n}")))
}

/// Public trait for Fibonacci calculators.
pub trait Calculator: Send + Sync {
    /// Calculate F(n).
    fn calculate(&self, n: i64) -> Result<BigUint, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Internal trait for strategy implementations.
/// Wrapped by `FibCalculator` which adds index validation and tracing.
pub trait CoreCalculator: Send + Sync {
    /// Perform the calculation for an already validated index.
    fn calculate_core(&self, n: u64) -> Result<BigUint, FibError>;

    /// Get the name of this strategy.
    fn name(&self) -> &str;
}

/// Decorator that wraps a `CoreCalculator` with validation and tracing.
pub struct FibCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }
}

impl Calculator for FibCalculator {
    fn calculate(&self, n: i64) -> Result<BigUint, FibError> {
        let n = checked_index(n)?;

        let _span = tracing::debug_span!("calculate", strategy = self.inner.name(), n).entered();
        let result = self.inner.calculate_core(n);
        match &result {
            Ok(value) => tracing::debug!(bits = value.bits(), "calculation complete"),
            Err(e) => tracing::warn!(error = %e, "calculation failed"),
        }
        result
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
