//! # koblitz
//!
//! A pure Rust implementation of ECDSA over secp256k1, built on
//! arbitrary-precision modular arithmetic.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! koblitz = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from two sub-crates:
//!
//! - [`koblitz-algorithms`](koblitz_algorithms): modular arithmetic, the
//!   curve group law, the secp256k1 constants and byte encodings
//! - [`koblitz-sign`](koblitz_sign): ECDSA key handling, RFC 6979 nonce
//!   derivation, signing and verification
//!
//! ## Example
//!
//! ```
//! use koblitz::prelude::*;
//! use num_bigint::BigUint;
//!
//! let curve = koblitz::algorithms::ec::k256::curve();
//! let secret = SecretKey::new(curve, BigUint::from(100u8))?;
//! let public = derive_public_key(curve, &secret);
//!
//! let digest = BigUint::from(1000u16);
//! let signature = sign(curve, &secret, &digest)?;
//! assert!(verify(curve, &public, &digest, &signature));
//! # Ok::<(), koblitz::sign::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub use koblitz_algorithms as algorithms;
pub use koblitz_sign as sign;

/// Common imports for koblitz users
pub mod prelude {
    // Re-export curve group types
    pub use crate::algorithms::ec::{Curve, CurveParams, Point};

    // Re-export signature types and operations
    pub use crate::sign::{
        derive_public_key, generate_keypair, sign, verify, PureBackend, SecretKey, Signature,
        SignatureBackend,
    };
}
