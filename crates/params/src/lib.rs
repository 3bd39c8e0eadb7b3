//! Constant values for the pqkex library
//!
//! Parameter tables are plain `const` data so that every crate in the
//! workspace, including `no_std` builds, can share one source of truth.

#![no_std]

pub mod pqc;
