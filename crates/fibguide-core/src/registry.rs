//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::{Calculator, CoreCalculator, FibCalculator, FibError};
use crate::constants::DEFAULT_RECURSION_LIMIT;
use crate::iterative::IterativeFibonacci;
use crate::matrix::MatrixFibonacci;
use crate::memo::MemoizedFibonacci;
use crate::recursive::RecursiveFibonacci;

/// Names accepted by [`DefaultFactory`], in benchmark order.
pub const STRATEGY_NAMES: [&str; 4] = ["recursive", "iterative", "memoized", "matrix"];

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Settings applied when the factory builds a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryConfig {
    /// Largest index the recursive strategy accepts.
    pub recursion_limit: u64,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

/// Default factory with lazy creation and cache.
///
/// Calculators are created once per name and then shared, so a memoized
/// calculator keeps its cache for as long as the factory lives.
pub struct DefaultFactory {
    config: FactoryConfig,
    cache: RwLock<HashMap<String, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FactoryConfig::default())
    }

    /// Create a factory with explicit settings.
    #[must_use]
    pub fn with_config(config: FactoryConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_calculator(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        let core: Arc<dyn CoreCalculator> = match name {
            "recursive" => Arc::new(RecursiveFibonacci::with_limit(self.config.recursion_limit)),
            "iterative" => Arc::new(IterativeFibonacci::new()),
            "memoized" | "memo" => Arc::new(MemoizedFibonacci::new()),
            "matrix" => Arc::new(MatrixFibonacci::new()),
            _ => return Err(FibError::Config(format!("unknown strategy: {name}"))),
        };
        Ok(Arc::new(FibCalculator::new(core)))
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        // Check cache first
        if let Some(calc) = self.cache.read().get(name) {
            return Ok(Arc::clone(calc));
        }

        // Create and cache; re-check under the write lock so racing callers share one instance
        let mut cache = self.cache.write();
        if let Some(calc) = cache.get(name) {
            return Ok(Arc::clone(calc));
        }
        let calc = self.create_calculator(name)?;
        tracing::debug!(name, strategy = calc.name(), "calculator created");
        cache.insert(name.to_string(), Arc::clone(&calc));
        Ok(calc)
    }

    fn available(&self) -> Vec<&str> {
        STRATEGY_NAMES.to_vec()
    }
}
