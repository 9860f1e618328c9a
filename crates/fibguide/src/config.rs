//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use fibguide_core::constants::DEFAULT_RECURSION_LIMIT;
use fibguide_core::registry::FactoryConfig;

/// fibguide: compute, compare and benchmark Fibonacci strategies.
#[derive(Parser, Debug)]
#[command(name = "fibguide", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Fibonacci index to compute.
    #[arg(
        short,
        long,
        default_value = "10",
        env = "FIBGUIDE_N",
        allow_negative_numbers = true
    )]
    pub n: i64,

    /// Strategy: recursive, iterative, memoized, matrix, a comma-separated list, or all.
    #[arg(long, default_value = "iterative", env = "FIBGUIDE_ALGO")]
    pub algo: String,

    /// Time each selected strategy and print a comparison table.
    #[arg(long)]
    pub bench: bool,

    /// Print the first K Fibonacci numbers instead of computing F(n).
    #[arg(long, value_name = "K", allow_negative_numbers = true)]
    pub sequence: Option<i64>,

    /// Report whether VALUE is a Fibonacci number.
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    pub is_member: Option<String>,

    /// Compute F(n) modulo M without the full-precision value.
    #[arg(long, value_name = "M")]
    pub modulo: Option<String>,

    /// Largest index the recursive strategy accepts (at most 45).
    #[arg(long, default_value_t = DEFAULT_RECURSION_LIMIT, env = "FIBGUIDE_RECURSION_LIMIT")]
    pub recursion_limit: u64,

    /// Verbose output (full values, debug logging).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information about the result.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the value).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the computed value to a file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Settings for the calculator factory.
    #[must_use]
    pub fn factory_config(&self) -> FactoryConfig {
        FactoryConfig {
            recursion_limit: self.recursion_limit,
        }
    }

    /// Log filter used when `RUST_LOG` is unset.
    #[must_use]
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "warn,fibguide=debug,fibguide_lib=debug,fibguide_core=debug,fibguide_bench=debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("fibguide").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.algo, "iterative");
        assert_eq!(config.recursion_limit, DEFAULT_RECURSION_LIMIT);
        assert!(!config.bench);
        assert!(config.sequence.is_none());
        assert_eq!(config.default_log_filter(), "warn");
    }

    #[test]
    fn negative_values_parse() {
        let config = parse(&["-n", "-5", "--sequence", "-2", "--is-member", "-1"]);
        assert_eq!(config.n, -5);
        assert_eq!(config.sequence, Some(-2));
        assert_eq!(config.is_member.as_deref(), Some("-1"));
    }

    #[test]
    fn factory_config_carries_limit() {
        let config = parse(&["--recursion-limit", "20"]);
        assert_eq!(config.factory_config().recursion_limit, 20);
    }

    #[test]
    fn verbose_raises_log_level() {
        let config = parse(&["-v"]);
        assert!(config.default_log_filter().contains("fibguide_core=debug"));
    }

    #[test]
    fn command_is_well_formed() {
        <AppConfig as clap::CommandFactory>::command().debug_assert();
    }
}
