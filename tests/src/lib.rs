//! Testing utilities for the pqkex library

use pqkex_api::KeyExchange;
use pqkex_kem::ntru::{NtruKe, NtruProfile, NtruStrength};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaChaRng;
use zeroize::Zeroizing;

/// Entropy source replaying a fixed byte string
///
/// Fails once the data runs out, which lets tests exercise entropy
/// failures of the DRBG.
pub struct FixedEntropy {
    data: Vec<u8>,
    pos: usize,
}

impl FixedEntropy {
    /// Serves `data` front to back
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet handed out
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl RngCore for FixedEntropy {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(e) = self.try_fill_bytes(dest) {
            panic!("{}", e);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        if self.remaining() < dest.len() {
            return Err(rand::Error::new("fixed entropy exhausted"));
        }
        dest.copy_from_slice(&self.data[self.pos..self.pos + dest.len()]);
        self.pos += dest.len();
        Ok(())
    }
}

impl CryptoRng for FixedEntropy {}

/// Session seeded deterministically from `seed`
pub fn seeded_session(
    strength: NtruStrength,
    profile: NtruProfile,
    seed: u64,
) -> NtruKe<ChaChaRng> {
    match NtruKe::new(strength, profile, ChaChaRng::seed_from_u64(seed)) {
        Ok(ke) => ke,
        Err(e) => panic!("session setup failed: {}", e),
    }
}

/// Runs a complete exchange and returns both shared secrets
pub fn run_exchange<I, R>(
    initiator: &mut I,
    responder: &mut R,
) -> pqkex_api::Result<(Zeroizing<Vec<u8>>, Zeroizing<Vec<u8>>)>
where
    I: KeyExchange,
    R: KeyExchange,
{
    let public_key = initiator.public_key()?;
    responder.set_public_key(&public_key)?;
    let ciphertext = responder.public_key()?;
    initiator.set_public_key(&ciphertext)?;
    Ok((initiator.shared_secret()?, responder.shared_secret()?))
}
