// kem/src/ntru/public_key.rs

//! NTRU public keys and SVES encryption.

use alloc::vec::Vec;
use zeroize::Zeroizing;

use algorithms::drbg::Drbg;
use algorithms::poly::serialize::{CoefficientPacker, CoefficientUnpacker, DefaultCoefficientSerde};
use api::error::Result as ApiResult;
use api::Serialize;

use super::encoding::{bits_to_trits, decode_header, encode_header, KeyBlobTag};
use super::param_set::{NtruParamSet, KEY_HEADER_LEN};
use super::sves;
use crate::error::{validate, Error, Result};

/// Public key: the ring element h = 3 * g * f^-1 mod q
#[derive(Clone, PartialEq, Eq)]
pub struct NtruPublicKey {
    params: NtruParamSet,
    h: Vec<u16>,
    encoding: Vec<u8>,
}

impl NtruPublicKey {
    /// Wraps a freshly computed ring element
    pub(crate) fn new(params: NtruParamSet, h: Vec<u16>) -> Result<Self> {
        let packed = DefaultCoefficientSerde::pack_coeffs(&h, usize::from(params.q_bits))?;
        let mut encoding = Vec::with_capacity(params.public_key_len());
        encode_header(KeyBlobTag::PublicKey, params, &mut encoding);
        encoding.extend_from_slice(&packed);
        Ok(Self { params, h, encoding })
    }

    /// Decodes a public key blob
    ///
    /// The blob must carry the public key tag, a known OID and exactly one
    /// packed ring element.
    pub fn decode(blob: &[u8]) -> Result<Self> {
        let (tag, params) = decode_header(blob)?;
        validate::key(tag == KeyBlobTag::PublicKey, "NTRU public", "not a public key blob")?;
        validate::length("NTRU public key", blob.len(), params.public_key_len())?;

        let h = DefaultCoefficientSerde::unpack_coeffs(
            &blob[KEY_HEADER_LEN..],
            params.degree(),
            usize::from(params.q_bits),
        )?;
        Ok(Self {
            params,
            h,
            encoding: blob.to_vec(),
        })
    }

    /// Parameter set the key belongs to
    pub fn param_set(&self) -> NtruParamSet {
        self.params
    }

    /// Table identifier of the parameter set
    pub fn id(&self) -> u8 {
        self.params.id
    }

    /// Canonical encoding
    pub fn encoding(&self) -> &[u8] {
        &self.encoding
    }

    /// The ring element h
    pub fn h(&self) -> &[u16] {
        &self.h
    }

    fn packed_h(&self) -> &[u8] {
        &self.encoding[KEY_HEADER_LEN..]
    }

    /// SVES encryption of `message` under this key
    pub(crate) fn encrypt<D: Drbg + ?Sized>(&self, drbg: &mut D, message: &[u8]) -> Result<Vec<u8>> {
        let params = self.params;
        let name = params.name;
        let sec_len = usize::from(params.sec_strength_len);
        let mask_q = params.q - 1;

        validate::encapsulation(
            message.len() <= usize::from(params.m_len_max),
            name,
            "message too long",
        )?;

        for _ in 0..sves::MAX_ENCRYPT_ATTEMPTS {
            let b = Zeroizing::new(drbg.generate_vec(sec_len)?);

            let seed = sves::blinding_seed(params, message, &b, self.packed_h());
            let r = sves::blinding_poly(params, &seed)?;
            let mut big_r = Zeroizing::new(r.ring_mult(&self.h)?);
            let mask = sves::mask(params, &big_r)?;

            let mut m = Zeroizing::new(Vec::with_capacity(sves::message_buffer_len(params)));
            m.extend_from_slice(&b);
            m.push(message.len() as u8);
            m.extend_from_slice(message);
            m.resize(sves::message_buffer_len(params), 0);

            let mut m_trits = bits_to_trits(&m, params.message_trits());
            m_trits
                .iter_mut()
                .zip(mask.as_slice())
                .for_each(|(t, &k)| *t = (*t + k) % 3);

            let (weight_ok, m1) = sves::check_weight(params, &m_trits);
            if !weight_ok {
                continue;
            }

            for (e, &t) in big_r.iter_mut().zip(m_trits.iter()) {
                *e = match t {
                    1 => e.wrapping_add(1),
                    2 => e.wrapping_sub(1),
                    _ => *e,
                } & mask_q;
            }
            if params.is_product_form {
                sves::adjust_last(&mut big_r, -m1, params.q);
            }

            return Ok(DefaultCoefficientSerde::pack_coeffs(
                &big_r,
                usize::from(params.q_bits),
            )?);
        }

        Err(Error::Encapsulation {
            algorithm: name,
            details: "no message representative of sufficient weight",
        })
    }
}

impl Serialize for NtruPublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::decode(bytes)?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.encoding.clone()
    }
}

impl core::fmt::Debug for NtruPublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NtruPublicKey")
            .field("params", &self.params)
            .field("len", &self.encoding.len())
            .finish()
    }
}
