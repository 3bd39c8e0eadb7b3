//! Public API traits and types for the pqkex library
//!
//! This crate provides the public API surface for the pqkex ecosystem: the
//! error type every other crate converts into, and the traits implemented by
//! key-exchange methods.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{KeyExchange, Serialize};

// Re-export trait modules for direct access
pub use traits::{key_exchange, serialize};
