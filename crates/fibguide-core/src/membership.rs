//! Fibonacci membership test.

use num_bigint::{BigInt, BigUint};
use num_integer::Roots;
use num_traits::ToPrimitive;

use crate::constants::FIB_TABLE;

/// Whether `value` equals F(k) for some k >= 0. Negative values never are.
///
/// Values that fit in a u64 are looked up in the precomputed table. Larger
/// values use Gessel's test: x is a Fibonacci number iff 5x^2 + 4 or
/// 5x^2 - 4 is a perfect square.
#[must_use]
pub fn is_fibonacci(value: &BigInt) -> bool {
    let Some(x) = value.to_biguint() else {
        return false;
    };

    if let Some(small) = x.to_u64() {
        return FIB_TABLE.binary_search(&small).is_ok();
    }

    let five_x_sq = BigUint::from(5u32) * &x * &x;
    is_perfect_square(&(&five_x_sq + 4u32)) || is_perfect_square(&(five_x_sq - 4u32))
}

fn is_perfect_square(n: &BigUint) -> bool {
    let root = Roots::sqrt(n);
    &root * &root == *n
}
