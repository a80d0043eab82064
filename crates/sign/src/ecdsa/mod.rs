//! ECDSA signing and verification over a short-Weierstrass curve group
//!
//! The scheme follows FIPS 186-4 section 6 with deterministic nonce
//! generation per RFC 6979. The curve instance is passed explicitly to
//! every operation; see [`koblitz_algorithms::ec::k256`] for the
//! secp256k1 constant.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use koblitz_algorithms::ec::{Curve, Point};
use koblitz_algorithms::encoding::{from_bytes_32, to_bytes_32};
use koblitz_algorithms::modular::inverse_mod;

use crate::error::{Error, Result};

pub mod rfc6979;
use rfc6979::NonceGenerator;


/// Upper bound on nonce re-derivations for one signature.
///
/// A single retry already has probability on the order of 2^-256 for a
/// well-formed curve; the bound only keeps the loop finite if the curve
/// instance is misconfigured.
const MAX_SIGN_RETRIES: usize = 64;

/// A validated private scalar `d ∈ [1, n-1]`.
///
/// Holds both the scalar and its fixed-width byte form (the latter feeds
/// nonce derivation). The byte form is zeroized on drop.
#[derive(Clone)]
pub struct SecretKey {
    scalar: BigUint,
    bytes: [u8; 32],
}

impl SecretKey {
    /// Validate a scalar into a secret key.
    ///
    /// A scalar outside `[1, n-1]` indicates a key-generation or
    /// configuration bug upstream and is surfaced as an error.
    pub fn new(curve: &Curve, scalar: BigUint) -> Result<Self> {
        if scalar.is_zero() || &scalar >= curve.order() {
            return Err(Error::InvalidKey(
                "secret scalar outside [1, n-1]".to_string(),
            ));
        }
        let bytes = to_bytes_32(&scalar)?;
        Ok(SecretKey { scalar, bytes })
    }

    /// Parse a secret key from its fixed 32-byte big-endian form.
    pub fn from_bytes(curve: &Curve, bytes: &[u8; 32]) -> Result<Self> {
        Self::new(curve, from_bytes_32(bytes))
    }

    /// The private scalar.
    pub fn scalar(&self) -> &BigUint {
        &self.scalar
    }

    /// The fixed 32-byte big-endian form.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }
}

impl Zeroize for SecretKey {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
        // BigUint has no Zeroize impl; replacing it drops the old buffer.
        self.scalar = BigUint::zero();
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// An ECDSA signature `(r, s)` with both components in `[1, n-1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// The `r` component
    pub r: BigUint,
    /// The `s` component
    pub s: BigUint,
}

impl Signature {
    /// Serialize in compact form, `r || s` as two 32-byte big-endian halves.
    pub fn to_compact(&self) -> Result<[u8; 64]> {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&to_bytes_32(&self.r)?);
        out[32..].copy_from_slice(&to_bytes_32(&self.s)?);
        Ok(out)
    }

    /// Parse from compact form.
    ///
    /// No range validation happens here; out-of-range components are
    /// rejected by verification, not by parsing.
    pub fn from_compact(bytes: &[u8; 64]) -> Self {
        let mut r_bytes = [0u8; 32];
        let mut s_bytes = [0u8; 32];
        r_bytes.copy_from_slice(&bytes[..32]);
        s_bytes.copy_from_slice(&bytes[32..]);
        Signature {
            r: from_bytes_32(&r_bytes),
            s: from_bytes_32(&s_bytes),
        }
    }
}

/// Compute the public point `Q = d·G`.
pub fn derive_public_key(curve: &Curve, secret: &SecretKey) -> Point {
    curve.mul_base(&BigInt::from(secret.scalar.clone()))
}

/// Generate a key pair by rejection-sampling 32-byte strings into `[1, n-1]`.
pub fn generate_keypair<R: CryptoRng + RngCore>(
    curve: &Curve,
    rng: &mut R,
) -> Result<(SecretKey, Point)> {
    let mut bytes = [0u8; 32];
    loop {
        rng.fill_bytes(&mut bytes);
        match SecretKey::from_bytes(curve, &bytes) {
            Ok(secret) => {
                bytes.zeroize();
                let public = derive_public_key(curve, &secret);
                return Ok((secret, public));
            }
            Err(_) => continue,
        }
    }
}

/// Sign a message digest.
///
/// Algorithm (FIPS 186-4 section 6.3, RFC 6979 nonces):
/// 1. Derive `k` deterministically from `(d, e)`.
/// 2. `R = k·G`; if `R = ∞`, re-derive `k`.
/// 3. `r = R.x mod n`; if `r = 0`, re-derive `k`.
/// 4. `s = k⁻¹(e + r·d) mod n`; if `s = 0`, re-derive `k`.
/// 5. Return `(r, s)`.
///
/// Re-derivation pulls the next candidate of the RFC 6979 stream, so the
/// whole procedure stays a pure function of `(d, e)`: the same inputs
/// always produce the same signature.
pub fn sign(curve: &Curve, secret: &SecretKey, digest: &BigUint) -> Result<Signature> {
    let n = curve.order();
    let mut nonces = NonceGenerator::new(n, &secret.bytes, digest)?;

    for _ in 0..MAX_SIGN_RETRIES {
        let k = nonces.next_nonce();

        let x = match curve.mul_base(&BigInt::from(k.clone())) {
            Point::Infinity => continue,
            Point::Affine { x, .. } => x,
        };
        let r = x % n;
        if r.is_zero() {
            continue;
        }

        let k_inv = inverse_mod(&k, n)?;
        let s = (k_inv * ((digest + &r * &secret.scalar) % n)) % n;
        if s.is_zero() {
            continue;
        }

        return Ok(Signature { r, s });
    }

    Err(Error::SignatureGeneration {
        details: "exhausted deterministic nonce candidates".to_string(),
    })
}

/// Verify a signature over a message digest.
///
/// Total over adversarial input: malformed signatures, out-of-range
/// components and degenerate public points all yield `false`, never an
/// error or a panic.
pub fn verify(curve: &Curve, public: &Point, digest: &BigUint, signature: &Signature) -> bool {
    curve.verify_digest(public, digest, &signature.r, &signature.s)
}

/// Narrow interface for cross-validating signature implementations.
///
/// An accelerated or foreign-function reference implementation can be
/// wrapped in the same trait inside the test suite and compared output
/// for output; the pure core has no dependency on any such backend.
pub trait SignatureBackend {
    /// Compute the public point for a secret key.
    fn derive_public_key(&self, secret: &SecretKey) -> Point;

    /// Sign a message digest.
    fn sign(&self, secret: &SecretKey, digest: &BigUint) -> Result<Signature>;

    /// Verify a signature over a message digest.
    fn verify(&self, public: &Point, digest: &BigUint, signature: &Signature) -> bool;
}

/// The pure-arithmetic backend implemented by this crate.
pub struct PureBackend<'a> {
    curve: &'a Curve,
}

impl<'a> PureBackend<'a> {
    /// Wrap a curve instance.
    pub fn new(curve: &'a Curve) -> Self {
        PureBackend { curve }
    }
}

impl SignatureBackend for PureBackend<'_> {
    fn derive_public_key(&self, secret: &SecretKey) -> Point {
        derive_public_key(self.curve, secret)
    }

    fn sign(&self, secret: &SecretKey, digest: &BigUint) -> Result<Signature> {
        sign(self.curve, secret, digest)
    }

    fn verify(&self, public: &Point, digest: &BigUint, signature: &Signature) -> bool {
        verify(self.curve, public, digest, signature)
    }
}
