//! CLI result presenter.

use std::time::Duration;

use num_bigint::BigUint;

use fibguide_bench::interfaces::{BenchmarkReport, ResultPresenter};

use crate::output::{format_duration, format_number, format_result};
use crate::ui::{print_error, print_header, status_tag};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    details: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, details: bool) -> Self {
        Self {
            verbose,
            quiet,
            details,
        }
    }

    /// Render a single result the way `present_result` prints it.
    #[must_use]
    pub fn render_result(
        &self,
        algorithm: &str,
        n: i64,
        result: &BigUint,
        duration: Duration,
    ) -> String {
        if self.quiet {
            return result.to_string();
        }

        let mut lines = vec![
            format!("Algorithm: {algorithm}"),
            format!("N: {}", format_number(n)),
            format!("Duration: {}", format_duration(duration)),
        ];
        if self.details {
            lines.push(format!("Result bits: {}", result.bits()));
            lines.push(format!("Result digits: {}", result.to_string().len()));
        }
        lines.push(format!(
            "F({}) = {}",
            format_number(n),
            format_result(result, self.verbose)
        ));
        lines.join("\n")
    }

    /// Render one comparison row.
    #[must_use]
    pub fn render_row(&self, report: &BenchmarkReport) -> String {
        let detail = match &report.outcome {
            Ok(value) => format_result(value, self.verbose),
            Err(e) => e.to_string(),
        };
        format!(
            "  {:<22} {:>10} {} {}",
            report.label,
            format_duration(report.duration),
            status_tag(report.is_ok()),
            detail,
        )
    }

    /// One summary line per failed run, shown below the comparison table.
    #[must_use]
    pub fn render_failure_notes(&self, results: &[BenchmarkReport]) -> String {
        results
            .iter()
            .filter(|r| !r.is_ok())
            .map(|r| format!("  note: {}", r.summary()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, algorithm: &str, n: i64, result: &BigUint, duration: Duration) {
        println!("{}", self.render_result(algorithm, n, result, duration));
    }

    fn present_comparison(&self, results: &[BenchmarkReport]) {
        if self.quiet {
            return;
        }

        print_header("Benchmark");
        for result in results {
            println!("{}", self.render_row(result));
        }
        let notes = self.render_failure_notes(results);
        if !notes.is_empty() {
            println!("{notes}");
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
