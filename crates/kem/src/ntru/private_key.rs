// kem/src/ntru/private_key.rs

//! NTRU private keys: generation, encoding and SVES decryption.
//!
//! The secret is the sparse polynomial F with f = 1 + 3F. Its encoding
//! embeds the public key and appends F either as packed trits (single
//! polynomial sets) or as packed index lists (product-form sets).

use alloc::vec::Vec;
use zeroize::Zeroizing;

use algorithms::drbg::Drbg;
use algorithms::poly::serialize::{CoefficientPacker, CoefficientUnpacker, DefaultCoefficientSerde};

use super::encoding::{
    decode_header, encode_header, pack_trits, trits_to_bits, unpack_trits, KeyBlobTag,
};
use super::param_set::NtruParamSet;
use super::poly::NtruPoly;
use super::public_key::NtruPublicKey;
use super::ring;
use super::sves;
use crate::error::{validate, Error, Result};

/// Extra seed bytes drawn beyond the security strength for each sampled polynomial
const SEED_MARGIN: usize = 8;

/// An NTRU private key together with its public key
pub struct NtruPrivateKey {
    params: NtruParamSet,
    privkey: NtruPoly,
    pubkey: NtruPublicKey,
    encoding: Zeroizing<Vec<u8>>,
}

impl NtruPrivateKey {
    /// Generates a key pair for `params`, drawing all randomness from `drbg`
    ///
    /// # Errors
    /// Fails if the DRBG is weaker than the parameter set, if it fails, or if
    /// f = 1 + 3F happens not to be invertible modulo q.
    pub fn generate<D: Drbg + ?Sized>(drbg: &mut D, params: NtruParamSet) -> Result<Self> {
        let name = params.name;
        let seed_len = usize::from(params.sec_strength_len) + SEED_MARGIN;
        let mask = params.q - 1;

        validate::key_generation(
            drbg.security_strength() >= params.strength_bits(),
            name,
            "DRBG security strength below the parameter set",
        )?;

        let seed = Zeroizing::new(drbg.generate_vec(seed_len)?);
        let privkey = NtruPoly::from_seed(
            params.xof_type(),
            &seed,
            params.c_bits,
            params.n,
            params.q,
            params.df,
            params.df,
            params.is_product_form,
        )?;

        let mut f = Zeroizing::new(privkey.to_dense());
        f.iter_mut().for_each(|x| *x = x.wrapping_mul(3) & mask);
        f[0] = (f[0] + 1) & mask;

        let f_inv = Zeroizing::new(ring::inverse(&f, params.q)?.ok_or(Error::KeyGeneration {
            algorithm: name,
            details: "f is not invertible",
        })?);

        let seed = Zeroizing::new(drbg.generate_vec(seed_len)?);
        let g = NtruPoly::from_seed(
            params.xof_type(),
            &seed,
            params.c_bits,
            params.n,
            params.q,
            params.dg + 1,
            params.dg,
            false,
        )?;

        let mut h = g.ring_mult(&f_inv)?;
        h.iter_mut().for_each(|x| *x = x.wrapping_mul(3) & mask);
        let pubkey = NtruPublicKey::new(params, h)?;

        let encoding = encode(params, &privkey, &pubkey)?;
        Ok(Self {
            params,
            privkey,
            pubkey,
            encoding,
        })
    }

    /// Decodes a private key blob
    ///
    /// The trits tag is only accepted for single-polynomial sets and the
    /// indices tag only for product-form sets; the default tag means the
    /// natural form of the set. Every successfully decoded key re-encodes
    /// under the default tag.
    pub fn decode(blob: &[u8]) -> Result<Self> {
        let (tag, params) = decode_header(blob)?;
        let as_trits = match tag {
            KeyBlobTag::PublicKey => {
                return Err(Error::InvalidKey {
                    key_type: "NTRU private",
                    reason: "not a private key blob",
                })
            }
            KeyBlobTag::PrivateKeyTrits => {
                validate::key(
                    !params.is_product_form,
                    "NTRU private",
                    "trits encoding used for a product-form set",
                )?;
                true
            }
            KeyBlobTag::PrivateKeyIndices => {
                validate::key(
                    params.is_product_form,
                    "NTRU private",
                    "indices encoding used for a non product-form set",
                )?;
                false
            }
            KeyBlobTag::PrivateKeyDefault => !params.is_product_form,
        };
        validate::length("NTRU private key", blob.len(), params.private_key_len())?;

        let public_len = params.public_key_len();
        let mut public_blob = blob[..public_len].to_vec();
        public_blob[0] = KeyBlobTag::PublicKey.as_byte();
        let pubkey = NtruPublicKey::decode(&public_blob)?;

        let payload = &blob[public_len..];
        let privkey = if as_trits {
            decode_trits(params, payload)?
        } else {
            let indices = Zeroizing::new(DefaultCoefficientSerde::unpack_coeffs(
                payload,
                params.private_index_count(),
                usize::from(params.n_bits),
            )?);
            NtruPoly::from_data(&indices, params.n, params.q, params.df, params.df, true)
                .map_err(|_| Error::InvalidKey {
                    key_type: "NTRU private",
                    reason: "index outside the ring or repeated within a factor",
                })?
        };

        let encoding = encode(params, &privkey, &pubkey)?;
        Ok(Self {
            params,
            privkey,
            pubkey,
            encoding,
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

    /// Canonical encoding, always under the default tag
    pub fn encoding(&self) -> &[u8] {
        &self.encoding
    }

    /// The matching public key
    pub fn public_key(&self) -> &NtruPublicKey {
        &self.pubkey
    }

    /// SVES decryption of `ciphertext`
    ///
    /// Every failure is reported as a decapsulation error without saying
    /// which check rejected the ciphertext.
    pub(crate) fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let params = self.params;
        let name = params.name;
        let q = params.q;
        let mask = q - 1;
        let sec_len = usize::from(params.sec_strength_len);
        let m_len_max = usize::from(params.m_len_max);
        let message_trits = params.message_trits();

        validate::decapsulation(
            ciphertext.len() == params.ring_element_len(),
            name,
            "invalid ciphertext length",
        )?;
        let e = Zeroizing::new(
            DefaultCoefficientSerde::unpack_coeffs(
                ciphertext,
                params.degree(),
                usize::from(params.q_bits),
            )
            .map_err(|_| Error::Decapsulation {
                algorithm: name,
                details: "malformed ciphertext encoding",
            })?,
        );

        // a = e * f = e + 3 * e * F, centered around zero, then reduced mod 3
        let t = Zeroizing::new(self.privkey.ring_mult(&e)?);
        let cm: Zeroizing<Vec<u8>> = Zeroizing::new(
            e.iter()
                .zip(t.iter())
                .map(|(&x, &y)| {
                    let a = i32::from(x.wrapping_add(y.wrapping_mul(3)) & mask);
                    let centered = if a >= i32::from(q / 2) { a - i32::from(q) } else { a };
                    centered.rem_euclid(3) as u8
                })
                .collect(),
        );

        let (weight_ok, m1) = sves::check_weight(params, &cm[..message_trits]);
        validate::decapsulation(weight_ok, name, "invalid ciphertext")?;

        let mut cr = Zeroizing::new(e.to_vec());
        for (r, &c) in cr.iter_mut().zip(cm[..message_trits].iter()) {
            *r = match c {
                1 => r.wrapping_sub(1),
                2 => r.wrapping_add(1),
                _ => *r,
            } & mask;
        }
        if params.is_product_form {
            sves::adjust_last(&mut cr, m1, q);
        }

        let mask_trits = sves::mask(params, &cr)?;
        let m_trits: Zeroizing<Vec<u8>> = Zeroizing::new(
            cm[..message_trits]
                .iter()
                .zip(mask_trits.as_slice())
                .map(|(&c, &k)| (c + 3 - k) % 3)
                .collect(),
        );

        let (m, bits_ok) = trits_to_bits(&m_trits, sves::message_buffer_len(params));
        let len = usize::from(m[sec_len]);
        let len_ok = len <= m_len_max;
        let len = len.min(m_len_max);
        let message = &m[sec_len + 1..sec_len + 1 + len];
        let pad_ok = internal::ct_is_zero(&m[sec_len + 1 + len..sec_len + m_len_max + 2]);

        let seed = sves::blinding_seed(params, message, &m[..sec_len], self.pubkey_packed());
        let r = sves::blinding_poly(params, &seed)?;
        let big_r = Zeroizing::new(r.ring_mult(self.pubkey.h())?);
        let r_ok = internal::ct_eq_u16(&big_r, &cr);

        validate::decapsulation(bits_ok & len_ok & pad_ok & r_ok, name, "invalid ciphertext")?;
        Ok(Zeroizing::new(message.to_vec()))
    }

    fn pubkey_packed(&self) -> &[u8] {
        &self.pubkey.encoding()[super::param_set::KEY_HEADER_LEN..]
    }
}

impl core::fmt::Debug for NtruPrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "NtruPrivateKey({}, [REDACTED])", self.params)
    }
}

/// Builds the default-tag encoding of a key pair
fn encode(
    params: NtruParamSet,
    privkey: &NtruPoly,
    pubkey: &NtruPublicKey,
) -> Result<Zeroizing<Vec<u8>>> {
    let mut out = Zeroizing::new(Vec::with_capacity(params.private_key_len()));
    encode_header(KeyBlobTag::PrivateKeyDefault, params, &mut out);
    out.extend_from_slice(&pubkey.encoding()[super::param_set::KEY_HEADER_LEN..]);

    if params.is_product_form {
        let packed = Zeroizing::new(DefaultCoefficientSerde::pack_coeffs(
            privkey.indices(),
            usize::from(params.n_bits),
        )?);
        out.extend_from_slice(&packed);
    } else {
        let plus = params.df as usize;
        let mut trits = Zeroizing::new(alloc::vec![0u8; params.degree()]);
        let (pos, neg) = privkey.indices().split_at(plus);
        pos.iter().for_each(|&i| trits[usize::from(i)] = 1);
        neg.iter().for_each(|&i| trits[usize::from(i)] = 2);
        let packed = Zeroizing::new(pack_trits(&trits));
        out.extend_from_slice(&packed);
    }
    Ok(out)
}

/// Rebuilds F from a packed trit payload
fn decode_trits(params: NtruParamSet, payload: &[u8]) -> Result<NtruPoly> {
    let trits = unpack_trits(payload, params.degree())?;
    let df = params.df as usize;

    let mut indices = Zeroizing::new(Vec::with_capacity(2 * df));
    indices.extend(
        trits
            .iter()
            .enumerate()
            .filter(|(_, &t)| t == 1)
            .map(|(i, _)| i as u16),
    );
    let plus = indices.len();
    indices.extend(
        trits
            .iter()
            .enumerate()
            .filter(|(_, &t)| t == 2)
            .map(|(i, _)| i as u16),
    );
    let minus = indices.len() - plus;

    validate::key(
        plus == df && minus == df,
        "NTRU private",
        "wrong number of nonzero coefficients",
    )?;
    NtruPoly::from_data(&indices, params.n, params.q, params.df, params.df, false)
}
