// Path: crates/algorithms/src/poly/mod.rs
//! Polynomial coefficient serialization
//!
//! Ring elements and index lists travel as big-endian bit strings: each
//! coefficient occupies a fixed number of bits, most significant bit first,
//! and the final byte is zero-padded on the right.

pub mod serialize;

/// Prelude for easy importing of the packing traits.
pub mod prelude {
    pub use super::serialize::{
        packed_len, CoefficientPacker, CoefficientUnpacker, DefaultCoefficientSerde,
    };
}
