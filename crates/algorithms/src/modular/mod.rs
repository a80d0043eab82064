//! Modular arithmetic over arbitrary-precision integers
//!
//! The curve group and the signature algorithms are built on top of two
//! primitives: modular inversion via the extended Euclidean algorithm and
//! normalization of signed intermediates into `[0, m)`.
//!
//! These routines are not constant time; a hardened implementation would
//! replace them with a constant-time inversion ladder.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Error, Result};


/// Compute the multiplicative inverse of `a` modulo `m`.
///
/// Returns `b` with `a * b ≡ 1 (mod m)`, normalized into `[0, m)`.
///
/// Fails with [`Error::NotInvertible`] when `gcd(a, m) != 1`. The signing
/// and verification code never calls this with a non-invertible argument
/// over a prime modulus; such a failure indicates a logic fault upstream,
/// not an expected runtime condition.
pub fn inverse_mod(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    if m < &BigUint::from(2u8) {
        return Err(Error::param("m", "modulus must be at least 2"));
    }

    let modulus = BigInt::from(m.clone());

    // Extended Euclidean algorithm tracking the Bezout coefficient of `a`.
    let mut r0 = modulus.clone();
    let mut r1 = BigInt::from(a % m);
    let mut t0 = BigInt::zero();
    let mut t1 = BigInt::one();

    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r2 = &r0 - &q * &r1;
        r0 = r1;
        r1 = r2;
        let t2 = &t0 - &q * &t1;
        t0 = t1;
        t1 = t2;
    }

    if !r0.is_one() {
        return Err(Error::NotInvertible {
            context: "inverse_mod",
        });
    }

    Ok(normalize(&t0, m))
}

/// Reduce a signed integer into the canonical residue range `[0, m)`.
///
/// This is the floored residue, so negative inputs map to positive
/// representatives: `normalize(-1, m) == m - 1`.
pub fn normalize(x: &BigInt, m: &BigUint) -> BigUint {
    let modulus = BigInt::from(m.clone());
    x.mod_floor(&modulus)
        .to_biguint()
        .expect("floored residue is non-negative")
}
