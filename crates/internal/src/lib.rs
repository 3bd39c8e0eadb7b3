//! Internal utilities for the pqkex library
//!
//! Helpers shared by the algorithm crates that are not part of the public API
//! contract. Everything here is `no_std` compatible.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_u16, ct_is_zero};
