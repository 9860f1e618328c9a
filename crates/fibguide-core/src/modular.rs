//! Modular Fast Doubling.
//!
//! Computes F(n) mod m using modular arithmetic throughout,
//! avoiding the need to compute the full number.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::calculator::{checked_index, FibError};

/// Compute F(n) mod m, reducing after every operation.
///
/// The result lies in `[0, m)`. Fails with `InvalidArgument` for a negative
/// index or a zero modulus.
pub fn fibonacci_mod(n: i64, modulus: &BigUint) -> Result<BigUint, FibError> {
    let n = checked_index(n)?;
    if modulus.is_zero() {
        return Err(FibError::InvalidArgument("modulus must be positive".into()));
    }

    let num_bits = 64 - n.leading_zeros();
    let mut fk = BigUint::zero();
    let mut fk1 = BigUint::one() % modulus;

    for i in (0..num_bits).rev() {
        let fk_sq = (&fk * &fk) % modulus;
        let fk1_sq = (&fk1 * &fk1) % modulus;
        let cross = (&fk * &fk1) % modulus;

        // F(2k) = (2*cross - fk_sq) mod m
        let double_cross = (&cross << 1u32) % modulus;
        let f2k = if double_cross >= fk_sq {
            double_cross - &fk_sq
        } else {
            modulus - &fk_sq + double_cross
        };

        // F(2k+1) = (fk1_sq + fk_sq) mod m
        let f2k1 = (fk1_sq + fk_sq) % modulus;

        fk = f2k;
        fk1 = f2k1;

        if (n >> i) & 1 == 1 {
            let sum = (&fk + &fk1) % modulus;
            fk = std::mem::replace(&mut fk1, sum);
        }
    }

    Ok(fk)
}
