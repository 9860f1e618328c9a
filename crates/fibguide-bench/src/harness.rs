//! Core harness: timed execution and result analysis.
//!
//! Runs are sequential on the calling thread so one strategy's timing is
//! never skewed by another running alongside it.

use std::sync::Arc;
use std::time::Instant;

use fibguide_core::calculator::{Calculator, FibError};

use crate::interfaces::{BenchmarkReport, FailureKind};

/// Time a single invocation of `calc` for index `n`.
pub fn benchmark(calc: &dyn Calculator, n: i64, label: &str) -> BenchmarkReport {
    let start = Instant::now();
    let outcome = calc.calculate(n);
    let duration = start.elapsed();

    let report = BenchmarkReport {
        label: label.to_string(),
        n,
        outcome,
        duration,
    };

    match report.failure_kind() {
        None => tracing::info!(label, n, ?duration, "benchmark complete"),
        Some(FailureKind::ResourceExhausted) => {
            tracing::warn!(label, n, "strategy unsuitable for this magnitude");
        }
        Some(kind) => tracing::warn!(label, n, ?kind, "benchmark failed"),
    }

    report
}

/// Benchmark every calculator in turn, labelling each run with its name.
pub fn run_benchmarks(calculators: &[Arc<dyn Calculator>], n: i64) -> Vec<BenchmarkReport> {
    calculators
        .iter()
        .map(|calc| benchmark(calc.as_ref(), n, calc.name()))
        .collect()
}

/// Check that every successful run produced the same value.
pub fn analyze_comparison_results(results: &[BenchmarkReport]) -> Result<(), FibError> {
    let mut values = results.iter().filter_map(BenchmarkReport::value);

    let Some(first_value) = values.next() else {
        return Err(FibError::Calculation("no valid results".into()));
    };

    if values.any(|v| v != first_value) {
        tracing::warn!("strategies disagree");
        return Err(FibError::Mismatch);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use fibguide_core::registry::{CalculatorFactory, DefaultFactory};
    use num_bigint::BigUint;

    fn result(label: &str, outcome: Result<BigUint, FibError>) -> BenchmarkReport {
        BenchmarkReport {
            label: label.into(),
            n: 10,
            outcome,
            duration: Duration::from_millis(1),
        }
    }

    fn all_calculators(factory: &DefaultFactory) -> Vec<Arc<dyn Calculator>> {
        factory
            .available()
            .into_iter()
            .map(|name| factory.get(name).unwrap())
            .collect()
    }

    #[test]
    fn benchmark_single_success() {
        let factory = DefaultFactory::new();
        let calc = factory.get("iterative").unwrap();
        let report = benchmark(calc.as_ref(), 100, "iterative");
        assert_eq!(report.label, "iterative");
        assert_eq!(report.n, 100);
        assert_eq!(
            report.value(),
            Some(&BigUint::parse_bytes(b"354224848179261915075", 10).unwrap())
        );
    }

    #[test]
    fn benchmark_recursive_past_limit() {
        let factory = DefaultFactory::new();
        let calc = factory.get("recursive").unwrap();
        let report = benchmark(calc.as_ref(), 1000, "recursive");
        assert_eq!(report.failure_kind(), Some(FailureKind::ResourceExhausted));
    }

    #[test]
    fn benchmark_negative_index() {
        let factory = DefaultFactory::new();
        let calc = factory.get("matrix").unwrap();
        let report = benchmark(calc.as_ref(), -4, "matrix");
        assert_eq!(report.failure_kind(), Some(FailureKind::InvalidInput));
    }

    #[test]
    fn run_all_strategies_small_n() {
        let factory = DefaultFactory::new();
        let reports = run_benchmarks(&all_calculators(&factory), 25);
        assert_eq!(reports.len(), 4);
        for r in &reports {
            assert!(r.is_ok(), "{} failed: {:?}", r.label, r.outcome);
        }
        assert!(analyze_comparison_results(&reports).is_ok());
    }

    #[test]
    fn run_all_strategies_large_n() {
        let factory = DefaultFactory::new();
        let reports = run_benchmarks(&all_calculators(&factory), 500);
        let labels: Vec<&str> = reports.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Recursive", "Iterative", "Memoized", "MatrixExponentiation"]
        );
        assert_eq!(reports[0].failure_kind(), Some(FailureKind::ResourceExhausted));
        assert!(reports[1..].iter().all(BenchmarkReport::is_ok));
        // The recursive failure is ignored; the rest agree
        assert!(analyze_comparison_results(&reports).is_ok());
    }

    #[test]
    fn analyze_matching_results() {
        let results = vec![
            result("A", Ok(BigUint::from(55u32))),
            result("B", Ok(BigUint::from(55u32))),
        ];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![
            result("A", Ok(BigUint::from(55u32))),
            result("B", Ok(BigUint::from(56u32))),
        ];
        assert_eq!(analyze_comparison_results(&results), Err(FibError::Mismatch));
    }

    #[test]
    fn analyze_third_result_mismatches() {
        let val = BigUint::from(55u32);
        let results = vec![
            result("A", Ok(val.clone())),
            result("B", Ok(val)),
            result("C", Ok(BigUint::from(56u32))),
        ];
        assert_eq!(analyze_comparison_results(&results), Err(FibError::Mismatch));
    }

    #[test]
    fn analyze_results_ignores_error_entries() {
        let val = BigUint::from(55u32);
        let results = vec![
            result("A", Ok(val.clone())),
            result("B", Err(FibError::ResourceExhausted { n: 10, limit: 5 })),
            result("C", Ok(val)),
        ];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_no_valid_results() {
        let results = vec![result("A", Err(FibError::Calculation("failed".into())))];
        assert!(matches!(
            analyze_comparison_results(&results),
            Err(FibError::Calculation(_))
        ));
        assert!(matches!(
            analyze_comparison_results(&[]),
            Err(FibError::Calculation(_))
        ));
    }
}
