//! Memoized strategy.
//!
//! Two ownership models share one cache type:
//! - [`fibonacci_memo`] takes a caller-owned [`MemoCache`] that can be reused
//!   across calls;
//! - [`MemoizedFibonacci`] owns its cache for its whole lifetime, behind an
//!   exclusive lock so it can be shared between callers.
//!
//! There is no implicitly shared default cache. The table is filled
//! bottom-up from the highest cached index, so deep requests never recurse.

use num_bigint::BigUint;
use parking_lot::Mutex;

use crate::calculator::{checked_index, CoreCalculator, FibError};
use crate::constants::MAX_MATERIALIZED_TERMS;

/// Monotonically growing index -> value table. Never evicts.
///
/// Entries are always contiguous from F(0): index `k` is the `k`-th slot.
#[derive(Debug, Default, Clone)]
pub struct MemoCache {
    values: Vec<BigUint>,
    computed: u64,
    hits: u64,
}

impl MemoCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total number of values ever computed (cache insertions).
    #[must_use]
    pub fn computed(&self) -> u64 {
        self.computed
    }

    /// Number of lookups answered straight from the cache.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Look up F(n) without computing it.
    #[must_use]
    pub fn get(&self, n: u64) -> Option<&BigUint> {
        usize::try_from(n).ok().and_then(|i| self.values.get(i))
    }

    /// Drop every cached value and reset the counters.
    pub fn clear(&mut self) {
        self.values.clear();
        self.computed = 0;
        self.hits = 0;
    }

    /// Return F(n), computing and caching every missing index up to `n`.
    ///
    /// Indices at or past `MAX_MATERIALIZED_TERMS` fail with
    /// `FibError::Capacity` and leave the table untouched.
    pub fn get_or_compute(&mut self, n: u64) -> Result<BigUint, FibError> {
        if let Some(value) = self.get(n) {
            let value = value.clone();
            self.hits += 1;
            return Ok(value);
        }

        if n >= MAX_MATERIALIZED_TERMS {
            tracing::warn!(n, limit = MAX_MATERIALIZED_TERMS, "memo table ceiling reached");
            return Err(FibError::Capacity(format!(
                "memo table for F({n}) exceeds the limit of {MAX_MATERIALIZED_TERMS} entries"
            )));
        }
        let idx = usize::try_from(n)
            .map_err(|_| FibError::Capacity(format!("index {n} exceeds the address space")))?;

        let start = self.values.len();
        self.values.try_reserve(idx + 1 - start).map_err(|e| {
            FibError::Capacity(format!("cannot allocate memo table for F({n}): {e}"))
        })?;
        for k in start..=idx {
            let next = match k {
                0 => BigUint::ZERO,
                1 => BigUint::from(1u32),
                _ => &self.values[k - 1] + &self.values[k - 2],
            };
            self.values.push(next);
            self.computed += 1;
        }
        tracing::debug!(n, filled = idx + 1 - start, "memo table extended");

        Ok(self.values[idx].clone())
    }
}

/// Compute F(n) with a caller-owned cache.
pub fn fibonacci_memo(n: i64, cache: &mut MemoCache) -> Result<BigUint, FibError> {
    let n = checked_index(n)?;
    cache.get_or_compute(n)
}

/// Memoizing calculator that owns its cache.
pub struct MemoizedFibonacci {
    cache: Mutex<MemoCache>,
}

impl MemoizedFibonacci {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(MemoCache::new()),
        }
    }

    /// Number of cached indices.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Total number of values computed over this instance's lifetime.
    #[must_use]
    pub fn computed(&self) -> u64 {
        self.cache.lock().computed()
    }

    /// Drop the cached values.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}

impl Default for MemoizedFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for MemoizedFibonacci {
    fn calculate_core(&self, n: u64) -> Result<BigUint, FibError> {
        self.cache.lock().get_or_compute(n)
    }

    fn name(&self) -> &'static str {
        "Memoized"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterative;

    #[test]
    fn explicit_cache_base_cases() {
        let mut cache = MemoCache::new();
        assert_eq!(fibonacci_memo(0, &mut cache).unwrap(), BigUint::ZERO);
        assert_eq!(fibonacci_memo(1, &mut cache).unwrap(), BigUint::from(1u32));
    }

    #[test]
    fn explicit_cache_populates_visited_indices() {
        let mut cache = MemoCache::new();
        assert_eq!(fibonacci_memo(20, &mut cache).unwrap(), BigUint::from(6765u32));
        assert_eq!(cache.len(), 21);
        assert_eq!(cache.computed(), 21);
        for n in 0..=20 {
            assert_eq!(cache.get(n), Some(&iterative::fibonacci(n)));
        }
        assert_eq!(cache.get(21), None);
    }

    #[test]
    fn second_call_does_not_recompute() {
        let mut cache = MemoCache::new();
        let first = fibonacci_memo(50, &mut cache).unwrap();
        let computed = cache.computed();
        let second = fibonacci_memo(50, &mut cache).unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.computed(), computed);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn smaller_index_after_larger_is_a_hit() {
        let mut cache = MemoCache::new();
        fibonacci_memo(40, &mut cache).unwrap();
        let before = cache.computed();
        assert_eq!(fibonacci_memo(10, &mut cache).unwrap(), BigUint::from(55u32));
        assert_eq!(cache.computed(), before);
    }

    #[test]
    fn larger_index_only_fills_the_gap() {
        let mut cache = MemoCache::new();
        fibonacci_memo(10, &mut cache).unwrap();
        assert_eq!(cache.computed(), 11);
        fibonacci_memo(15, &mut cache).unwrap();
        assert_eq!(cache.computed(), 16);
    }

    #[test]
    fn fresh_caches_are_independent() {
        let mut a = MemoCache::new();
        let mut b = MemoCache::new();
        fibonacci_memo(30, &mut a).unwrap();
        assert!(b.is_empty());
        fibonacci_memo(5, &mut b).unwrap();
        assert_eq!(a.len(), 31);
        assert_eq!(b.len(), 6);
    }

    #[test]
    fn negative_index_rejected() {
        let mut cache = MemoCache::new();
        assert!(matches!(
            fibonacci_memo(-1, &mut cache),
            Err(FibError::InvalidArgument(_))
        ));
        assert!(cache.is_empty());
    }

    #[test]
    fn deep_index_does_not_recurse() {
        let mut cache = MemoCache::new();
        let value = fibonacci_memo(20_000, &mut cache).unwrap();
        assert_eq!(value, iterative::fibonacci(20_000));
    }

    #[test]
    fn huge_index_is_a_capacity_error() {
        let mut cache = MemoCache::new();
        fibonacci_memo(10, &mut cache).unwrap();

        let err = fibonacci_memo(i64::MAX, &mut cache).unwrap_err();
        assert!(matches!(err, FibError::Capacity(_)));
        assert!(err.is_resource_exhausted());
        assert_eq!(cache.len(), 11);
        assert_eq!(cache.computed(), 11);

        let ceiling = i64::try_from(MAX_MATERIALIZED_TERMS).unwrap();
        assert!(matches!(
            fibonacci_memo(ceiling, &mut cache),
            Err(FibError::Capacity(_))
        ));
    }

    #[test]
    fn instance_reports_capacity_error() {
        let calc = MemoizedFibonacci::new();
        assert!(matches!(
            calc.calculate_core(u64::MAX),
            Err(FibError::Capacity(_))
        ));
        assert_eq!(calc.cache_len(), 0);
    }

    #[test]
    fn clear_resets_counters() {
        let mut cache = MemoCache::new();
        fibonacci_memo(10, &mut cache).unwrap();
        fibonacci_memo(10, &mut cache).unwrap();
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.computed(), 0);
        assert_eq!(cache.hits(), 0);
    }

    #[test]
    fn instance_cache_lives_with_the_instance() {
        let calc = MemoizedFibonacci::new();
        assert_eq!(calc.calculate_core(30).unwrap(), BigUint::from(832_040u32));
        assert_eq!(calc.cache_len(), 31);
        let computed = calc.computed();
        assert_eq!(calc.calculate_core(30).unwrap(), BigUint::from(832_040u32));
        assert_eq!(calc.computed(), computed);

        calc.clear();
        assert_eq!(calc.cache_len(), 0);
        assert_eq!(calc.name(), "Memoized");
    }

    #[test]
    fn instance_is_shareable_across_threads() {
        use std::sync::Arc;

        let calc = Arc::new(MemoizedFibonacci::new());
        let handles: Vec<_> = (0..4u64)
            .map(|i| {
                let calc = Arc::clone(&calc);
                std::thread::spawn(move || calc.calculate_core(60 + i).unwrap())
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), iterative::fibonacci(60 + i as u64));
        }
        assert_eq!(calc.cache_len(), 64);
    }
}
