//! Arithmetic and elliptic-curve primitives for the koblitz library
//!
//! This crate provides the pure-arithmetic core: modular inversion,
//! short-Weierstrass group operations over arbitrary-precision integers,
//! the secp256k1 curve instance, and the integer/byte boundary layer.
//!
//! Everything here is a pure function over immutable value types. There is
//! no shared mutable state, no I/O and no unsafe code. The arithmetic is
//! not constant time; the crate-level docs of [`ec`] note where a hardened
//! implementation would differ.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

// Modular arithmetic
pub mod modular;
pub use modular::{inverse_mod, normalize};

// Elliptic-curve group operations
pub mod ec;
pub use ec::{k256, Curve, CurveParams, Point};

// Integer/byte boundary layer
pub mod encoding;
pub use encoding::{from_bytes_32, to_bytes_32};
