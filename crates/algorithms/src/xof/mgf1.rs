//! MGF1 mask generation function used as an extendable output function
//!
//! Output block `i` is `H(state || I2OSP(i, 4))` with the counter starting at
//! zero. When seed hashing is enabled the state is `H(seed)` rather than the
//! raw seed, which keeps the per-block input short for long seeds.

use alloc::vec::Vec;
use core::marker::PhantomData;

use sha1::Sha1;
use sha2::digest::Digest;
use sha2::Sha256;
use zeroize::Zeroize;

use super::{ExtendableOutputFunction, XofType};
use crate::error::{validate, Result};

/// MGF1 over the digest `D`
pub struct Mgf1<D: Digest> {
    hash_seed: bool,
    seed: Vec<u8>,
    state: Vec<u8>,
    block: Vec<u8>,
    offset: usize,
    counter: u32,
    exhausted: bool,
    finalized: bool,
    _digest: PhantomData<D>,
}

/// MGF1 over SHA-1
pub type Mgf1Sha1 = Mgf1<Sha1>;

/// MGF1 over SHA-256
pub type Mgf1Sha256 = Mgf1<Sha256>;

/// Maps a digest to its [`XofType`] selector
pub trait Mgf1Digest: Digest {
    /// Selector of MGF1 over this digest
    const XOF_TYPE: XofType;
}

impl Mgf1Digest for Sha1 {
    const XOF_TYPE: XofType = XofType::Mgf1Sha1;
}

impl Mgf1Digest for Sha256 {
    const XOF_TYPE: XofType = XofType::Mgf1Sha256;
}

impl<D: Mgf1Digest> Mgf1<D> {
    /// Creates an unseeded instance; with `hash_seed` the seed is hashed once
    /// before block generation
    pub fn new(hash_seed: bool) -> Self {
        Self {
            hash_seed,
            seed: Vec::new(),
            state: Vec::new(),
            block: Vec::new(),
            offset: 0,
            counter: 0,
            exhausted: false,
            finalized: false,
            _digest: PhantomData,
        }
    }

    /// Computes the next output block into `self.block`
    fn next_block(&mut self) -> Result<()> {
        validate::processing(!self.exhausted, "MGF1", "counter exhausted")?;

        let mut hasher = D::new();
        hasher.update(&self.state);
        hasher.update(self.counter.to_be_bytes());
        self.block.zeroize();
        self.block = hasher.finalize().to_vec();
        self.offset = 0;

        match self.counter.checked_add(1) {
            Some(next) => self.counter = next,
            None => self.exhausted = true,
        }
        Ok(())
    }
}

impl<D: Mgf1Digest> ExtendableOutputFunction for Mgf1<D> {
    fn update(&mut self, data: &[u8]) -> Result<()> {
        validate::processing(!self.finalized, "MGF1", "update after finalize")?;
        self.seed.extend_from_slice(data);
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        if self.finalized {
            return Ok(());
        }
        self.state = if self.hash_seed {
            D::digest(&self.seed).to_vec()
        } else {
            self.seed.clone()
        };
        self.seed.zeroize();
        self.finalized = true;
        Ok(())
    }

    fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
        self.finalize()?;

        let mut written = 0;
        while written < output.len() {
            if self.offset == self.block.len() {
                self.next_block()?;
            }
            let take = (self.block.len() - self.offset).min(output.len() - written);
            output[written..written + take]
                .copy_from_slice(&self.block[self.offset..self.offset + take]);
            self.offset += take;
            written += take;
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.seed.zeroize();
        self.state.zeroize();
        self.block.zeroize();
        self.offset = 0;
        self.counter = 0;
        self.exhausted = false;
        self.finalized = false;
    }

    fn algorithm(&self) -> XofType {
        D::XOF_TYPE
    }
}

impl<D: Digest> Drop for Mgf1<D> {
    fn drop(&mut self) {
        self.seed.zeroize();
        self.state.zeroize();
        self.block.zeroize();
    }
}
