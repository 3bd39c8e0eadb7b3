//! # pqkex
//!
//! NTRU post-quantum key exchange for IKE-style two-message protocols.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pqkex = "0.3"
//! ```
//!
//! ```
//! use pqkex::prelude::*;
//!
//! let mut initiator = NtruKe::with_os_entropy(NtruStrength::Bits128, NtruProfile::Optimum)?;
//! let mut responder = NtruKe::with_os_entropy(NtruStrength::Bits128, NtruProfile::Optimum)?;
//!
//! let public_key = initiator.public_key()?;
//! responder.set_public_key(&public_key)?;
//! let ciphertext = responder.public_key()?;
//! initiator.set_public_key(&ciphertext)?;
//!
//! assert_eq!(*initiator.shared_secret()?, *responder.shared_secret()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `post-quantum` (default): the NTRU engine and its primitives
//! - `serde`: serialization of session configuration
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`pqkex-api`]: Error type and key exchange traits
//! - [`pqkex-algorithms`]: MGF1 XOF, HMAC-DRBG and coefficient packing
//! - [`pqkex-kem`]: NTRU keys, SVES encryption and key exchange sessions
//! - [`pqkex-params`]: EES parameter set table

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use pqkex_api as api;
pub use pqkex_common as common;
pub use pqkex_internal as internal;
pub use pqkex_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use pqkex_algorithms as algorithms;

#[cfg(feature = "kem")]
pub use pqkex_kem as kem;

/// Common imports for pqkex users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{KeyExchange, Serialize};

    // Re-export security types
    pub use crate::common::SecretVec;

    #[cfg(feature = "kem")]
    pub use crate::kem::ntru::{
        NtruConfig, NtruKe, NtruParamSet, NtruPrivateKey, NtruProfile, NtruPublicKey,
        NtruStrength,
    };
}
