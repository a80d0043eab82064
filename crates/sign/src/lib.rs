//! Digital signatures for the koblitz library
//!
//! This crate implements ECDSA over the curve groups provided by
//! `koblitz-algorithms`, with deterministic RFC 6979 nonce derivation.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ecdsa;
pub mod error;

pub use ecdsa::{
    derive_public_key, generate_keypair, sign, verify, PureBackend, SecretKey, Signature,
    SignatureBackend,
};
pub use error::{Error, Result};
