//! NTRU key exchange
//!
//! This crate implements NTRU encryption over the EES parameter sets of
//! IEEE 1363.1 / ANSI X9.98 and the two-message key exchange that IKE
//! negotiates as `NTRU_112` through `NTRU_256`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod ntru;

// Re-exports
pub use error::{Error, Result};
pub use ntru::{
    NtruConfig, NtruKe, NtruParamSet, NtruPrivateKey, NtruProfile, NtruPublicKey, NtruStrength,
};
