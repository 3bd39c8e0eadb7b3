//! Cryptographic primitives for the pqkex library
//!
//! This crate provides the building blocks the NTRU engine consumes as
//! services: an MGF1-based extendable output function with a bit-level
//! reader on top, an SP 800-90A HMAC-DRBG, and MSB-first packing of ring
//! coefficients. Hash functions themselves come from the RustCrypto `sha1`
//! and `sha2` crates.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Extendable output functions
#[cfg(feature = "xof")]
pub mod xof;
#[cfg(feature = "xof")]
pub use xof::{BitSpender, ExtendableOutputFunction, Mgf1, Mgf1Sha1, Mgf1Sha256, XofType};

// Deterministic random bit generators
#[cfg(feature = "drbg")]
pub mod drbg;
#[cfg(feature = "drbg")]
pub use drbg::{Drbg, HmacDrbg};

// Polynomial coefficient serialization
pub mod poly;
