//! Bit-granular reader over an extendable output function
//!
//! The output stream is consumed as a big-endian bit string: the first value
//! returned takes the most significant bits of the first output byte.

use alloc::boxed::Box;

use super::{ExtendableOutputFunction, XofType};
use crate::error::{validate, Result};

/// Largest width a single [`BitSpender::get`] call may request
pub const MAX_BITS_PER_DRAW: u32 = 32;

/// Draws unsigned integers of arbitrary bit width from an XOF stream
pub struct BitSpender {
    xof: Box<dyn ExtendableOutputFunction>,
    acc: u64,
    bits_left: u32,
}

impl BitSpender {
    /// Seeds a new XOF of type `xof_type` with `seed`
    pub fn new(xof_type: XofType, seed: &[u8]) -> Result<Self> {
        Ok(Self::from_xof(xof_type.create(seed)?))
    }

    /// Wraps an already seeded XOF
    pub fn from_xof(xof: Box<dyn ExtendableOutputFunction>) -> Self {
        Self {
            xof,
            acc: 0,
            bits_left: 0,
        }
    }

    /// Returns the next `bits` bits of the stream as an integer
    pub fn get(&mut self, bits: u32) -> Result<u32> {
        validate::parameter(
            bits > 0 && bits <= MAX_BITS_PER_DRAW,
            "bits",
            "bit count must be in range [1, 32]",
        )?;

        while self.bits_left < bits {
            let mut byte = [0u8; 1];
            self.xof.squeeze(&mut byte)?;
            self.acc = (self.acc << 8) | u64::from(byte[0]);
            self.bits_left += 8;
        }

        self.bits_left -= bits;
        let value = (self.acc >> self.bits_left) & ((1u64 << bits) - 1);
        self.acc &= (1u64 << self.bits_left) - 1;
        Ok(value as u32)
    }

    /// The algorithm backing this reader
    pub fn algorithm(&self) -> XofType {
        self.xof.algorithm()
    }
}

impl Drop for BitSpender {
    fn drop(&mut self) {
        self.acc = 0;
        self.bits_left = 0;
    }
}
