//! Extendable Output Functions (XOF)
//!
//! NTRU derives its pseudorandom trits and index candidates from MGF1, the
//! mask generation function of PKCS #1, used as an extendable output
//! function over SHA-1 or SHA-256. [`XofType`] is the algorithm selector
//! passed around by the NTRU engine; [`BitSpender`] reads the output stream
//! as a sequence of arbitrary-width unsigned integers.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::{validate, Error, Result};

pub mod bitspender;
pub mod mgf1;

// Re-exports
pub use bitspender::BitSpender;
pub use mgf1::{Mgf1, Mgf1Sha1, Mgf1Sha256};

/// Selector of the extendable output function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XofType {
    /// No algorithm selected; every constructor rejects it
    Undefined,
    /// MGF1 over SHA-1
    Mgf1Sha1,
    /// MGF1 over SHA-256
    Mgf1Sha256,
}

impl XofType {
    /// Algorithm name
    pub fn name(&self) -> &'static str {
        match self {
            XofType::Undefined => "undefined",
            XofType::Mgf1Sha1 => "MGF1-SHA1",
            XofType::Mgf1Sha256 => "MGF1-SHA256",
        }
    }

    /// Size of one output block in bytes
    pub fn block_size(&self) -> usize {
        match self {
            XofType::Undefined => 0,
            XofType::Mgf1Sha1 => 20,
            XofType::Mgf1Sha256 => 32,
        }
    }

    /// Instantiates the XOF, hashes `seed` into its state and finalizes it
    pub fn create(self, seed: &[u8]) -> Result<Box<dyn ExtendableOutputFunction>> {
        let mut xof: Box<dyn ExtendableOutputFunction> = match self {
            XofType::Undefined => {
                return Err(Error::param("xof", "undefined XOF algorithm"));
            }
            XofType::Mgf1Sha1 => Box::new(Mgf1Sha1::new(true)),
            XofType::Mgf1Sha256 => Box::new(Mgf1Sha256::new(true)),
        };
        xof.update(seed)?;
        xof.finalize()?;
        Ok(xof)
    }
}

impl core::fmt::Display for XofType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for extendable output functions
pub trait ExtendableOutputFunction {
    /// Absorbs seed material; fails once output has been squeezed
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Finalizes the XOF state for output
    fn finalize(&mut self) -> Result<()>;

    /// Squeezes output bytes into the provided buffer
    fn squeeze(&mut self, output: &mut [u8]) -> Result<()>;

    /// Squeezes the specified number of output bytes into a new vector
    fn squeeze_into_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        validate::parameter(len > 0, "output_length", "XOF output length must be greater than 0")?;
        let mut out = alloc::vec![0u8; len];
        self.squeeze(&mut out)?;
        Ok(out)
    }

    /// Resets the XOF to its unseeded state
    fn reset(&mut self);

    /// The algorithm this instance implements
    fn algorithm(&self) -> XofType;
}
