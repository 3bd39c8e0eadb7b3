//! Common implementations and shared functionality for the pqkex library
//!
//! This crate provides the secret-holding buffer types used across the
//! pqkex components.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod security;

pub use security::SecretVec;
