//! Koblitz secp256k1 curve instance
//!
//! The curve equation is `y² = x³ + 7` over the prime field F_p where
//! `p = 2^256 - 2^32 - 977`, with the standard base point and prime group
//! order `n` used by Bitcoin-family protocols.
//!
//! The instance is a process-wide immutable constant: it is built once and
//! passed explicitly to every operation, so the whole stack stays purely
//! functional and trivially parallel.

use num_bigint::BigUint;
use num_traits::Zero;
use once_cell::sync::Lazy;

use super::{Curve, CurveParams, Point};


/// Size of a secp256k1 scalar in bytes (32 bytes = 256 bits)
pub const K256_SCALAR_SIZE: usize = 32;

/// Size of a secp256k1 field element in bytes (32 bytes = 256 bits)
pub const K256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of an uncompressed secp256k1 point in bytes: format byte (0x04) + x-coordinate + y-coordinate
pub const K256_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * K256_FIELD_ELEMENT_SIZE;

const P_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F";
const N_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";
const GX_HEX: &str = "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";
const GY_HEX: &str = "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";

static CURVE: Lazy<Curve> = Lazy::new(|| {
    let params = CurveParams::new(
        from_hex(P_HEX),
        BigUint::zero(),
        BigUint::from(7u8),
        from_hex(N_HEX),
    )
    .expect("secp256k1 domain parameters are well formed");
    Curve::new(params, from_hex(GX_HEX), from_hex(GY_HEX))
        .expect("secp256k1 base point is valid and has the claimed order")
});

/// The process-wide secp256k1 group instance.
pub fn curve() -> &'static Curve {
    &CURVE
}

/// The standard base point `G` of the secp256k1 curve.
pub fn base_point_g() -> &'static Point {
    CURVE.generator()
}

fn from_hex(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("curve constants are valid hex")
}
