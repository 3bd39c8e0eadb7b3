//! Deterministic random bit generators
//!
//! The NTRU engine never touches an entropy source directly: key pairs,
//! SVES blinding values and shared secrets are all drawn from a [`Drbg`]
//! owned by the key exchange session.

use alloc::vec::Vec;

use crate::error::Result;

pub mod hmac;

pub use self::hmac::HmacDrbg;

/// Trait for deterministic random bit generators
pub trait Drbg {
    /// Fills `output` with pseudorandom bytes, reseeding first if due
    fn generate(&mut self, output: &mut [u8]) -> Result<()>;

    /// Generates `len` pseudorandom bytes into a new vector
    fn generate_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut out = alloc::vec![0u8; len];
        self.generate(&mut out)?;
        Ok(out)
    }

    /// Security strength of the instantiation in bits
    fn security_strength(&self) -> u32;

    /// Mixes fresh entropy into the internal state
    fn reseed(&mut self) -> Result<()>;
}
