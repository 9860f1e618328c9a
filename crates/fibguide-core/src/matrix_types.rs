//! 2x2 big-integer matrix used by the matrix-exponentiation strategy.

use num_bigint::BigUint;

/// 2x2 matrix of `BigUint` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub a: BigUint, // [0][0]
    pub b: BigUint, // [0][1]
    pub c: BigUint, // [1][0]
    pub d: BigUint, // [1][1]
}

impl Matrix {
    /// Create the identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            a: BigUint::from(1u32),
            b: BigUint::ZERO,
            c: BigUint::ZERO,
            d: BigUint::from(1u32),
        }
    }

    /// Create the Fibonacci Q matrix [[1,1],[1,0]].
    #[must_use]
    pub fn fibonacci_q() -> Self {
        Self {
            a: BigUint::from(1u32),
            b: BigUint::from(1u32),
            c: BigUint::from(1u32),
            d: BigUint::ZERO,
        }
    }

    /// Check if this is the identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Standard 2x2 product `self * rhs`.
    #[must_use]
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self {
            a: &self.a * &rhs.a + &self.b * &rhs.c,
            b: &self.a * &rhs.b + &self.b * &rhs.d,
            c: &self.c * &rhs.a + &self.d * &rhs.c,
            d: &self.c * &rhs.b + &self.d * &rhs.d,
        }
    }

    /// Raise to the `exp`-th power by repeated squaring.
    ///
    /// Walks the bits of `exp` from the most significant down: square, then
    /// multiply by the base when the bit is set. This is the loop form of
    /// M^1 = M, M^(2k) = (M^k)^2, M^(2k+1) = M * M^(2k). `pow(0)` is the identity.
    #[must_use]
    pub fn pow(&self, exp: u64) -> Self {
        let num_bits = 64 - exp.leading_zeros();
        let mut result = Self::identity();
        for i in (0..num_bits).rev() {
            result = result.multiply(&result);
            if (exp >> i) & 1 == 1 {
                result = result.multiply(self);
            }
        }
        result
    }
}
