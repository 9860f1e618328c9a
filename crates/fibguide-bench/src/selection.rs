//! Strategy selection logic.

use std::sync::Arc;

use fibguide_core::calculator::{Calculator, FibError};
use fibguide_core::registry::CalculatorFactory;

/// Get calculators to run based on strategy selection.
///
/// Accepts `all` or a comma-separated list of strategy names.
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, FibError> {
    match algo.trim() {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        list => list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| factory.get(name))
            .collect::<Result<Vec<_>, _>>()
            .and_then(|calcs| {
                if calcs.is_empty() {
                    Err(FibError::Config("no strategy selected".into()))
                } else {
                    Ok(calcs)
                }
            }),
    }
}
