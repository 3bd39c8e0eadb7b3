//! HMAC_DRBG with HMAC-SHA256 (NIST SP 800-90A)
//!
//! No nonce is used; the instantiation input is
//! `entropy_input || personalization_string`, where the entropy input is one
//! and a half times the requested security strength.

use hmac::{Hmac, Mac};
use rand::{CryptoRng, RngCore};
use sha2::Sha256;
use zeroize::{Zeroize, Zeroizing};

use super::Drbg;
use crate::error::{validate, Error, Result};

type HmacSha256 = Hmac<Sha256>;

const OUT_LEN: usize = 32;

/// Highest supported security strength in bits
pub const MAX_STRENGTH: u32 = 256;

/// Largest number of bytes a single request may ask for
pub const MAX_REQUEST: usize = 1 << 16;

/// Number of requests served before the generator reseeds itself
pub const DEFAULT_RESEED_INTERVAL: u32 = 0xffff_fffe;

/// HMAC-SHA256 DRBG drawing its entropy input from `R`
pub struct HmacDrbg<R: RngCore + CryptoRng> {
    key: [u8; OUT_LEN],
    value: [u8; OUT_LEN],
    strength: u32,
    reseed_counter: u32,
    reseed_interval: u32,
    entropy: R,
}

impl<R: RngCore + CryptoRng> HmacDrbg<R> {
    /// Instantiates the generator at `strength` bits
    pub fn new(strength: u32, entropy: R, personalization: &[u8]) -> Result<Self> {
        Self::with_reseed_interval(strength, entropy, personalization, DEFAULT_RESEED_INTERVAL)
    }

    /// Instantiates the generator with a custom reseed interval
    pub fn with_reseed_interval(
        strength: u32,
        entropy: R,
        personalization: &[u8],
        reseed_interval: u32,
    ) -> Result<Self> {
        validate::parameter(
            strength > 0 && strength <= MAX_STRENGTH,
            "strength",
            "security strength must be in range [1, 256] bits",
        )?;
        validate::parameter(reseed_interval > 0, "reseed_interval", "must be at least 1")?;

        let mut drbg = Self {
            key: [0x00; OUT_LEN],
            value: [0x01; OUT_LEN],
            strength,
            reseed_counter: 1,
            reseed_interval,
            entropy,
        };

        let mut seed_material = drbg.entropy_input()?;
        seed_material.extend_from_slice(personalization);
        drbg.update(&seed_material)?;
        Ok(drbg)
    }

    fn entropy_len(&self) -> usize {
        (self.strength as usize * 3 / 2).div_ceil(8)
    }

    fn entropy_input(&mut self) -> Result<Zeroizing<alloc::vec::Vec<u8>>> {
        let mut input = Zeroizing::new(alloc::vec![0u8; self.entropy_len()]);
        self.entropy
            .try_fill_bytes(&mut input)
            .map_err(|_| Error::RandomGeneration {
                operation: "HMAC_DRBG",
                details: "entropy source failed",
            })?;
        Ok(input)
    }

    fn hmac(key: &[u8], parts: &[&[u8]]) -> Result<[u8; OUT_LEN]> {
        let mut mac = <HmacSha256 as Mac>::new_from_slice(key)
            .map_err(|_| Error::param("key", "invalid HMAC key length"))?;
        for part in parts {
            mac.update(part);
        }
        let mut out = [0u8; OUT_LEN];
        out.copy_from_slice(&mac.finalize().into_bytes());
        Ok(out)
    }

    fn update(&mut self, provided: &[u8]) -> Result<()> {
        self.key = Self::hmac(&self.key, &[&self.value, &[0x00], provided])?;
        self.value = Self::hmac(&self.key, &[&self.value])?;

        if !provided.is_empty() {
            self.key = Self::hmac(&self.key, &[&self.value, &[0x01], provided])?;
            self.value = Self::hmac(&self.key, &[&self.value])?;
        }
        Ok(())
    }
}

impl<R: RngCore + CryptoRng> Drbg for HmacDrbg<R> {
    fn generate(&mut self, output: &mut [u8]) -> Result<()> {
        if output.len() > MAX_REQUEST {
            return Err(Error::RandomGeneration {
                operation: "HMAC_DRBG",
                details: "request exceeds maximum length",
            });
        }
        if self.reseed_counter > self.reseed_interval {
            self.reseed()?;
        }

        for chunk in output.chunks_mut(OUT_LEN) {
            self.value = Self::hmac(&self.key, &[&self.value])?;
            chunk.copy_from_slice(&self.value[..chunk.len()]);
        }
        self.update(&[])?;
        self.reseed_counter = self.reseed_counter.saturating_add(1);
        Ok(())
    }

    fn security_strength(&self) -> u32 {
        self.strength
    }

    fn reseed(&mut self) -> Result<()> {
        let seed_material = self.entropy_input()?;
        self.update(&seed_material)?;
        self.reseed_counter = 1;
        Ok(())
    }
}

impl<R: RngCore + CryptoRng> Drop for HmacDrbg<R> {
    fn drop(&mut self) {
        self.key.zeroize();
        self.value.zeroize();
    }
}
