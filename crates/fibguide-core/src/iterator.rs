//! Lazy Fibonacci producer using the standard additive recurrence.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::calculator::FibError;
use crate::constants::MAX_MATERIALIZED_TERMS;

/// Lazy, unbounded iterator over the Fibonacci sequence.
///
/// Each call to `next` yields the current value and advances one step, so
/// the first value is F(0) = 0. The iterator never returns `None`; bound it
/// with `take` or use [`sequence_prefix`].
///
/// # Example
/// ```
/// use fibguide_core::iterator::FibIterator;
/// let fibs: Vec<_> = FibIterator::new().take(7).map(|v| v.to_string()).collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
#[derive(Debug, Clone)]
pub struct FibIterator {
    a: BigUint,
    b: BigUint,
    index: u64,
}

impl FibIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: BigUint::zero(),
            b: BigUint::one(),
            index: 0,
        }
    }

    /// Start iteration at F(n) without stepping through the earlier values.
    #[must_use]
    pub fn starting_at(n: u64) -> Self {
        let (a, b) = fib_pair(n);
        Self { a, b, index: n }
    }

    /// Index of the value the next call to `next` will yield.
    #[must_use]
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Restart the sequence at F(0).
    pub fn reset(&mut self) {
        self.a.set_zero();
        self.b.set_one();
        self.index = 0;
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        let next = &self.a + &self.b;
        let val = std::mem::replace(&mut self.a, std::mem::replace(&mut self.b, next));
        self.index += 1;
        Some(val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for FibIterator {}

/// Materialize the first `count` Fibonacci numbers.
///
/// Counts above `MAX_MATERIALIZED_TERMS` fail with `FibError::Capacity`.
pub fn sequence_prefix(count: i64) -> Result<Vec<BigUint>, FibError> {
    let requested = u64::try_from(count)
        .map_err(|_| FibError::InvalidArgument(format!("count must be non-negative, got {count}")))?;
    if requested > MAX_MATERIALIZED_TERMS {
        return Err(FibError::Capacity(format!(
            "sequence of {requested} terms exceeds the limit of {MAX_MATERIALIZED_TERMS}"
        )));
    }
    let len = usize::try_from(requested)
        .map_err(|_| FibError::Capacity(format!("{requested} terms exceed the address space")))?;

    let mut values = Vec::new();
    values
        .try_reserve_exact(len)
        .map_err(|e| FibError::Capacity(format!("cannot allocate {len} terms: {e}")))?;
    values.extend(FibIterator::new().take(len));
    Ok(values)
}

/// (F(n), F(n+1)) by fast doubling:
///   F(2k)   = F(k) * (2*F(k+1) - F(k))
///   F(2k+1) = F(k)^2 + F(k+1)^2
fn fib_pair(n: u64) -> (BigUint, BigUint) {
    let num_bits = 64 - n.leading_zeros();
    let mut fk = BigUint::zero();
    let mut fk1 = BigUint::one();

    for i in (0..num_bits).rev() {
        let t = (&fk1 << 1u32) - &fk;
        let f2k = &fk * &t;
        let f2k1 = &fk * &fk + &fk1 * &fk1;

        if (n >> i) & 1 == 1 {
            fk1 = &f2k + &f2k1;
            fk = f2k1;
        } else {
            fk = f2k;
            fk1 = f2k1;
        }
    }

    (fk, fk1)
}
