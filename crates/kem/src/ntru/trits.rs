// kem/src/ntru/trits.rs

//! Deterministic trit generation from an XOF stream.
//!
//! Each XOF output byte below 3^5 = 243 is expanded into five base-3 digits,
//! least significant digit first; larger bytes are discarded.

use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use algorithms::xof::XofType;

use crate::error::{validate, Result};

/// Bytes at or above this value are rejected
const TRIT_BYTE_LIMIT: u8 = 243;

/// Number of trits packed into one accepted byte
pub const TRITS_PER_BYTE: usize = 5;

/// Most trits a single call may request
pub const MAX_TRITS: usize = 1 << 16;

/// A sequence of trits with values in {0, 1, 2}, where 2 stands for -1
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct NtruTrits {
    trits: Vec<u8>,
}

impl NtruTrits {
    /// Generates exactly `len` trits from the XOF `xof` seeded with `seed`
    ///
    /// Fails for [`XofType::Undefined`], for an empty seed and for more than
    /// [`MAX_TRITS`] trits.
    pub fn generate(len: usize, xof: XofType, seed: &[u8]) -> Result<Self> {
        validate::parameter(!seed.is_empty(), "seed", "trit generation needs a seed")?;
        validate::max_length("trit count", len, MAX_TRITS)?;
        let mut xof_state = xof.create(seed)?;

        let mut trits = Vec::with_capacity(len.saturating_add(TRITS_PER_BYTE));
        let mut block = alloc::vec![0u8; xof.block_size()];

        while trits.len() < len {
            xof_state.squeeze(&mut block)?;
            for &byte in block.iter() {
                if byte >= TRIT_BYTE_LIMIT {
                    continue;
                }
                let mut octet = byte;
                for _ in 0..TRITS_PER_BYTE {
                    trits.push(octet % 3);
                    octet /= 3;
                }
                if trits.len() >= len {
                    break;
                }
            }
        }
        block.zeroize();
        trits.truncate(len);

        Ok(Self { trits })
    }

    /// The generated trits
    pub fn as_slice(&self) -> &[u8] {
        &self.trits
    }

    /// Number of trits
    pub fn len(&self) -> usize {
        self.trits.len()
    }

    /// True if no trits were requested
    pub fn is_empty(&self) -> bool {
        self.trits.is_empty()
    }
}

impl AsRef<[u8]> for NtruTrits {
    fn as_ref(&self) -> &[u8] {
        &self.trits
    }
}

impl core::fmt::Debug for NtruTrits {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "NtruTrits(len={})", self.trits.len())
    }
}
