//! Harness interfaces: the per-run report and the presenter trait.

use std::time::Duration;

use num_bigint::BigUint;

use fibguide_core::calculator::FibError;

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a calculation result.
    fn present_result(&self, algorithm: &str, n: i64, result: &BigUint, duration: Duration);

    /// Present a comparison of several runs.
    fn present_comparison(&self, results: &[BenchmarkReport]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// How a benchmarked run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The index was rejected (negative).
    InvalidInput,
    /// Valid index, but beyond what the strategy can handle.
    ResourceExhausted,
    /// Anything else.
    Other,
}

/// Result of a single timed invocation.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// Label shown to the user.
    pub label: String,
    /// Requested index.
    pub n: i64,
    /// The computed value or a structured error.
    pub outcome: Result<BigUint, FibError>,
    /// Wall-clock duration of the invocation.
    pub duration: Duration,
}

impl BenchmarkReport {
    /// Whether the run produced a value.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The computed value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&BigUint> {
        self.outcome.as_ref().ok()
    }

    /// Classify the failure, `None` on success.
    #[must_use]
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match &self.outcome {
            Ok(_) => None,
            Err(FibError::InvalidArgument(_)) => Some(FailureKind::InvalidInput),
            Err(e) if e.is_resource_exhausted() => Some(FailureKind::ResourceExhausted),
            Err(_) => Some(FailureKind::Other),
        }
    }

    /// One-line human readable summary.
    #[must_use]
    pub fn summary(&self) -> String {
        match &self.outcome {
            Ok(value) => format!(
                "{}: F({}) = {value} ({:.3?})",
                self.label, self.n, self.duration
            ),
            Err(e) if e.is_resource_exhausted() => {
                format!("{}: {e}; use a faster strategy for this n", self.label)
            }
            Err(e) => format!("{}: error: {e}", self.label),
        }
    }
}
