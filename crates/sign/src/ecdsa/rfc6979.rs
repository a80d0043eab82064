//! Deterministic per-signature nonces (RFC 6979)
//!
//! A reused or predictable nonce leaks the private key from just two
//! signatures, so nonces are derived deterministically from the private
//! key and message digest with the HMAC-SHA256 construction of RFC 6979
//! section 3.2. The same `(key, digest)` pair always yields the same
//! candidate stream, which also makes signatures bit-for-bit reproducible
//! across implementations of the same scheme.
//!
//! No extra-entropy hedging is mixed in: hedging trades reproducibility
//! for RNG-failure resilience, and this library promises reproducibility.

use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use num_traits::Zero;
use sha2::Sha256;
use zeroize::Zeroize;

use koblitz_algorithms::encoding::to_bytes_32;

use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-DRBG style candidate stream for one `(key, digest)` pair.
///
/// The first call to [`next_nonce`](NonceGenerator::next_nonce) yields the
/// RFC 6979 nonce; each further call applies the step-H update and yields
/// the next candidate, which is how signing retries the negligible
/// degenerate cases (`r = 0`, `s = 0`, `k·G = ∞`) without losing
/// determinism.
pub struct NonceGenerator {
    k: [u8; 32],
    v: [u8; 32],
    order: BigUint,
    primed: bool,
}

impl NonceGenerator {
    /// Seed the generator per RFC 6979 section 3.2 steps b through g.
    ///
    /// `secret` is the private scalar in fixed 32-byte big-endian form and
    /// `digest` the message digest as an integer. Candidates are drawn as
    /// 256-bit strings, so the group order must fit in 256 bits.
    pub fn new(order: &BigUint, secret: &[u8; 32], digest: &BigUint) -> Result<Self> {
        if order.bits() > 256 || order < &BigUint::from(2u8) {
            return Err(Error::Internal(
                "nonce derivation requires an order between 2 and 2^256".into(),
            ));
        }

        // bits2octets(h1): reduce mod the order, encode fixed width.
        let h2 = to_bytes_32(&(digest % order))?;

        let mut gen = NonceGenerator {
            k: [0x00; 32],
            v: [0x01; 32],
            order: order.clone(),
            primed: false,
        };
        gen.k = hmac_seed(&gen.k, &gen.v, 0x00, secret, &h2);
        gen.v = hmac_chain(&gen.k, &gen.v);
        gen.k = hmac_seed(&gen.k, &gen.v, 0x01, secret, &h2);
        gen.v = hmac_chain(&gen.k, &gen.v);
        Ok(gen)
    }

    /// Produce the next nonce candidate in `[1, order-1]`.
    pub fn next_nonce(&mut self) -> BigUint {
        if self.primed {
            // The previous candidate was rejected by the caller.
            self.refresh();
        }
        self.primed = true;
        loop {
            self.v = hmac_chain(&self.k, &self.v);
            let candidate = BigUint::from_bytes_be(&self.v);
            if !candidate.is_zero() && candidate < self.order {
                return candidate;
            }
            self.refresh();
        }
    }

    /// Step H update: `K = HMAC_K(V || 0x00)`, `V = HMAC_K(V)`.
    fn refresh(&mut self) {
        let mut mac =
            HmacSha256::new_from_slice(&self.k).expect("HMAC-SHA256 accepts any key length");
        mac.update(&self.v);
        mac.update(&[0x00]);
        self.k = mac.finalize().into_bytes().into();
        self.v = hmac_chain(&self.k, &self.v);
    }
}

impl Drop for NonceGenerator {
    fn drop(&mut self) {
        self.k.zeroize();
        self.v.zeroize();
    }
}

/// `HMAC_K(V)`
fn hmac_chain(key: &[u8; 32], v: &[u8; 32]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC-SHA256 accepts any key length");
    mac.update(v);
    mac.finalize().into_bytes().into()
}

/// `HMAC_K(V || sep || int2octets(x) || bits2octets(h1))`
fn hmac_seed(key: &[u8; 32], v: &[u8; 32], sep: u8, secret: &[u8; 32], h2: &[u8; 32]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC-SHA256 accepts any key length");
    mac.update(v);
    mac.update(&[sep]);
    mac.update(secret);
    mac.update(h2);
    mac.finalize().into_bytes().into()
}
