//! Conversions between integers and fixed-width byte buffers
//!
//! The signature core works on integers; wire formats and test fixtures
//! work on fixed 32-byte big-endian buffers and hex strings. This module
//! is the boundary between the two.

use num_bigint::BigUint;

use crate::error::{Error, Result};

/// Encode an integer as a fixed 32-byte big-endian buffer.
///
/// Fails with [`Error::Length`] if the value does not fit in 256 bits.
pub fn to_bytes_32(value: &BigUint) -> Result<[u8; 32]> {
    let raw = value.to_bytes_be();
    if raw.len() > 32 {
        return Err(Error::Length {
            context: "to_bytes_32",
            expected: 32,
            actual: raw.len(),
        });
    }
    let mut out = [0u8; 32];
    out[32 - raw.len()..].copy_from_slice(&raw);
    Ok(out)
}

/// Decode a fixed 32-byte big-endian buffer into an integer.
pub fn from_bytes_32(bytes: &[u8; 32]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Encode an integer as a 64-character lowercase hex string.
pub fn to_hex_32(value: &BigUint) -> Result<String> {
    Ok(hex::encode(to_bytes_32(value)?))
}

/// Decode a big-endian hex string into an integer.
pub fn from_hex(hex_str: &str) -> Result<BigUint> {
    let bytes =
        hex::decode(hex_str).map_err(|_| Error::param("hex_str", "invalid hex string"))?;
    Ok(BigUint::from_bytes_be(&bytes))
}
