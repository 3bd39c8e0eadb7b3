// kem/src/ntru/encoding.rs

//! Key blob framing and trit/bit conversions.
//!
//! Every key blob starts with `[tag][oid_len][oid]`. The tag selects the
//! payload layout; the OID selects the parameter set.

use alloc::vec::Vec;
use zeroize::Zeroizing;

use params::pqc::ntru::NTRU_OID_LEN;

use super::param_set::{NtruParamSet, KEY_HEADER_LEN};
use crate::error::{validate, Error, Result};

/// Tag byte of a key blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum KeyBlobTag {
    /// Public key: packed ring element h
    PublicKey = 0x01,
    /// Private key in the natural form of its parameter set
    PrivateKeyDefault = 0x02,
    /// Private key with the secret polynomial packed as trits
    PrivateKeyTrits = 0xfe,
    /// Private key with the secret polynomial packed as index lists
    PrivateKeyIndices = 0xff,
}

impl KeyBlobTag {
    /// The tag byte
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// True for the three private key tags
    pub fn is_private(self) -> bool {
        !matches!(self, KeyBlobTag::PublicKey)
    }
}

impl TryFrom<u8> for KeyBlobTag {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        match byte {
            0x01 => Ok(KeyBlobTag::PublicKey),
            0x02 => Ok(KeyBlobTag::PrivateKeyDefault),
            0xfe => Ok(KeyBlobTag::PrivateKeyTrits),
            0xff => Ok(KeyBlobTag::PrivateKeyIndices),
            _ => Err(Error::Serialization {
                context: "NTRU key blob",
                details: "unknown tag",
            }),
        }
    }
}

/// Writes the blob header for `params`
pub fn encode_header(tag: KeyBlobTag, params: NtruParamSet, out: &mut Vec<u8>) {
    out.push(tag.as_byte());
    out.push(NTRU_OID_LEN as u8);
    out.extend_from_slice(&params.oid);
}

/// Parses a blob header
pub fn decode_header(blob: &[u8]) -> Result<(KeyBlobTag, NtruParamSet)> {
    validate::serialization(
        blob.len() >= KEY_HEADER_LEN,
        "NTRU key blob",
        "truncated header",
    )?;
    let tag = KeyBlobTag::try_from(blob[0])?;
    validate::serialization(
        usize::from(blob[1]) == NTRU_OID_LEN,
        "NTRU key blob",
        "invalid OID length",
    )?;
    let params = NtruParamSet::by_oid(&blob[2..KEY_HEADER_LEN]).ok_or(Error::Serialization {
        context: "NTRU key blob",
        details: "unknown OID",
    })?;
    Ok((tag, params))
}

/// Packs trits five to a byte as `sum(t_i * 3^i)`
pub fn pack_trits(trits: &[u8]) -> Vec<u8> {
    trits
        .chunks(5)
        .map(|chunk| chunk.iter().rev().fold(0u8, |acc, &t| acc * 3 + t))
        .collect()
}

/// Unpacks `count` trits from five-trit bytes
///
/// Rejects bytes of 243 and above, and nonzero trits past `count`.
pub fn unpack_trits(bytes: &[u8], count: usize) -> Result<Zeroizing<Vec<u8>>> {
    validate::length("NTRU packed trits", bytes.len(), count.div_ceil(5))?;
    let mut trits = Zeroizing::new(Vec::with_capacity(bytes.len() * 5));

    for &byte in bytes {
        validate::serialization(byte < 243, "NTRU packed trits", "byte out of range")?;
        let mut octet = byte;
        for _ in 0..5 {
            trits.push(octet % 3);
            octet /= 3;
        }
    }
    validate::serialization(
        trits[count..].iter().all(|&t| t == 0),
        "NTRU packed trits",
        "nonzero padding",
    )?;
    trits.truncate(count);
    Ok(trits)
}

// 3 bits -> 2 trits: the value v maps to (v / 3, v % 3); 8 and 9 are unused
const BITS_TO_TRIT1: [u8; 8] = [0, 0, 0, 1, 1, 1, 2, 2];
const BITS_TO_TRIT2: [u8; 8] = [0, 1, 2, 0, 1, 2, 0, 1];

/// Converts a big-endian bit string into `count` trits, 3 bits to 2 trits
///
/// Bits past the end of `bytes` read as zero.
pub fn bits_to_trits(bytes: &[u8], count: usize) -> Zeroizing<Vec<u8>> {
    let mut trits = Zeroizing::new(Vec::with_capacity(count + 1));
    let total_bits = bytes.len() * 8;
    let mut pos = 0;

    while trits.len() < count {
        let mut v = 0usize;
        for _ in 0..3 {
            let bit = if pos < total_bits {
                (bytes[pos / 8] >> (7 - pos % 8)) & 1
            } else {
                0
            };
            v = (v << 1) | usize::from(bit);
            pos += 1;
        }
        trits.push(BITS_TO_TRIT1[v]);
        if trits.len() < count {
            trits.push(BITS_TO_TRIT2[v]);
        }
    }
    trits
}

/// Converts trits back into an `out_len`-byte bit string
///
/// The flag is false if some trit pair does not encode three bits. A final
/// unpaired trit `t` encodes `3 * t`.
pub fn trits_to_bits(trits: &[u8], out_len: usize) -> (Zeroizing<Vec<u8>>, bool) {
    let mut out = Zeroizing::new(alloc::vec![0u8; out_len]);
    let total_bits = out_len * 8;
    let mut valid = true;
    let mut pos = 0;

    for pair in trits.chunks(2) {
        let t2 = pair.get(1).copied().unwrap_or(0);
        let mut v = pair[0] * 3 + t2;
        if v > 7 {
            valid = false;
            v = 7;
        }
        for shift in (0..3).rev() {
            if pos < total_bits {
                out[pos / 8] |= ((v >> shift) & 1) << (7 - pos % 8);
            }
            pos += 1;
        }
    }
    (out, valid)
}
