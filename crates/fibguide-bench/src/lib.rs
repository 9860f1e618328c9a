//! # fibguide-bench
//!
//! Strategy selection, single-invocation timing, and result comparison.

pub mod harness;
pub mod interfaces;
pub mod selection;

pub use harness::{analyze_comparison_results, benchmark, run_benchmarks};
pub use interfaces::{BenchmarkReport, FailureKind, ResultPresenter};
