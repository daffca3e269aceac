use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

use crate::error::{Result, ShamirError};

/// Arithmetic over the integers modulo a prime
///
/// Every sharing or recovery operation builds its own `PrimeField` from the
/// prime matching the active chunk size; nothing is memoized across moduli.
///
/// # Example
/// ```
/// use num_bigint::{BigInt, BigUint};
/// use prime_shamir::PrimeField;
///
/// let field = PrimeField::new(BigUint::from(257u32));
/// assert_eq!(field.modulo(&BigInt::from(-1)), BigUint::from(256u32));
/// ```
#[derive(Debug, Clone)]
pub struct PrimeField {
    prime: BigUint,
    signed_prime: BigInt,
}

impl PrimeField {
    pub fn new(prime: BigUint) -> Self {
        let signed_prime = BigInt::from(prime.clone());
        Self {
            prime,
            signed_prime,
        }
    }

    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Reduces `value` into `[0, prime)`, handling negative inputs.
    pub fn modulo(&self, value: &BigInt) -> BigUint {
        let mut remainder = value % &self.signed_prime;
        if remainder.is_negative() {
            remainder += &self.signed_prime;
        }
        // Non-negative after the adjustment, so the magnitude is the value
        remainder.magnitude().clone()
    }

    /// Multiplicative inverse of `value` modulo the prime, via the extended
    /// Euclidean algorithm
    ///
    /// Fails with [`ShamirError::NonInvertible`] when `value ≡ 0 (mod prime)`.
    pub fn inverse(&self, value: &BigInt) -> Result<BigUint> {
        let reduced = self.modulo(value);
        if reduced.is_zero() {
            return Err(ShamirError::NonInvertible);
        }

        let (gcd, bezout, _) = extended_gcd(BigInt::from(reduced), self.signed_prime.clone());
        if !gcd.is_one() {
            return Err(ShamirError::NonInvertible);
        }
        Ok(self.modulo(&bezout))
    }
}

/// Returns `(g, s, t)` with `s * a + t * b = g = gcd(a, b)`.
fn extended_gcd(a: BigInt, b: BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut r_prev, mut r) = (a, b);
    let (mut s_prev, mut s) = (BigInt::one(), BigInt::zero());
    let (mut t_prev, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &r_prev / &r;
        r_prev -= &quotient * &r;
        s_prev -= &quotient * &s;
        t_prev -= &quotient * &t;
        std::mem::swap(&mut r_prev, &mut r);
        std::mem::swap(&mut s_prev, &mut s);
        std::mem::swap(&mut t_prev, &mut t);
    }

    (r_prev, s_prev, t_prev)
}
