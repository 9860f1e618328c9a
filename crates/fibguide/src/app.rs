//! Application entry point and dispatch.

use std::str::FromStr;

use anyhow::{Context, Result};
use num_bigint::{BigInt, BigUint};

use fibguide_bench::harness::{analyze_comparison_results, run_benchmarks};
use fibguide_bench::interfaces::ResultPresenter;
use fibguide_bench::selection::get_calculators_to_run;
use fibguide_cli::output::{format_number, format_sequence, write_to_file};
use fibguide_cli::presenter::CLIResultPresenter;
use fibguide_core::calculator::FibError;
use fibguide_core::registry::DefaultFactory;
use fibguide_core::{fibonacci_mod, is_fibonacci, sequence_prefix};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibguide_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if let Some(count) = config.sequence {
        return run_sequence(config, count);
    }

    if let Some(value) = &config.is_member {
        return run_membership(config, value);
    }

    if let Some(modulus) = &config.modulo {
        return run_modulo(config, modulus);
    }

    run_compute(config)
}

fn run_sequence(config: &AppConfig, count: i64) -> Result<()> {
    let values = sequence_prefix(count)?;
    tracing::debug!(count, "sequence generated");

    if config.quiet {
        for v in &values {
            println!("{v}");
        }
    } else {
        println!("First {} Fibonacci numbers:", format_number(count));
        println!("{}", format_sequence(&values));
    }
    Ok(())
}

fn run_membership(config: &AppConfig, raw: &str) -> Result<()> {
    let value = BigInt::from_str(raw.trim())
        .map_err(|e| FibError::InvalidArgument(format!("not an integer: {raw:?} ({e})")))?;
    let member = is_fibonacci(&value);

    if config.quiet {
        println!("{member}");
    } else if member {
        println!("{value} is a Fibonacci number");
    } else {
        println!("{value} is not a Fibonacci number");
    }
    Ok(())
}

fn run_modulo(config: &AppConfig, raw: &str) -> Result<()> {
    let modulus = BigUint::from_str(raw.trim()).map_err(|e| {
        FibError::InvalidArgument(format!("modulus must be a positive integer: {raw:?} ({e})"))
    })?;
    let residue = fibonacci_mod(config.n, &modulus)?;

    if config.quiet {
        println!("{residue}");
    } else {
        println!("F({}) mod {modulus} = {residue}", format_number(config.n));
    }

    if let Some(path) = &config.output {
        write_to_file(path, &residue)
            .with_context(|| format!("writing result to {}", path.display()))?;
    }
    Ok(())
}

fn run_compute(config: &AppConfig) -> Result<()> {
    let factory = DefaultFactory::with_config(config.factory_config());
    let calculators = get_calculators_to_run(&config.algo, &factory)?;
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.details);

    let reports = run_benchmarks(&calculators, config.n);

    if reports.len() == 1 && !config.bench {
        let report = &reports[0];
        let value = report.outcome.clone()?;
        presenter.present_result(&report.label, config.n, &value, report.duration);
        return write_output(config, &value);
    }

    presenter.present_comparison(&reports);

    let Some(first) = reports.iter().find_map(|r| r.value()) else {
        // Every strategy failed; surface the first failure.
        return match reports.first().map(|r| r.outcome.clone()) {
            Some(Err(e)) => Err(e.into()),
            _ => Err(FibError::Calculation("no strategy produced a value".into()).into()),
        };
    };

    analyze_comparison_results(&reports)?;

    if config.quiet {
        println!("{first}");
    }
    write_output(config, first)
}

fn write_output(config: &AppConfig, value: &BigUint) -> Result<()> {
    if let Some(path) = &config.output {
        write_to_file(path, value)
            .with_context(|| format!("writing result to {}", path.display()))?;
        tracing::info!(path = %path.display(), "result written");
    }
    Ok(())
}
