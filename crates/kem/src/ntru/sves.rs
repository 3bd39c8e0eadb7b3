// kem/src/ntru/sves.rs

//! Pieces of SVES shared by encryption and decryption.

use alloc::vec::Vec;
use zeroize::Zeroizing;

use algorithms::poly::serialize::{CoefficientPacker, DefaultCoefficientSerde};

use super::param_set::NtruParamSet;
use super::poly::NtruPoly;
use super::trits::NtruTrits;
use crate::error::Result;

/// Most blinding values tried before encryption gives up
pub const MAX_ENCRYPT_ATTEMPTS: usize = 64;

/// Length of the padded message buffer `b || len || m || 0...`
pub fn message_buffer_len(params: NtruParamSet) -> usize {
    usize::from(params.sec_strength_len) + usize::from(params.m_len_max) + 3
}

/// Seed of the blinding polynomial: `oid || m || b || htrunc`
pub fn blinding_seed(
    params: NtruParamSet,
    message: &[u8],
    b: &[u8],
    packed_h: &[u8],
) -> Zeroizing<Vec<u8>> {
    let sec_len = usize::from(params.sec_strength_len);
    let mut seed = Zeroizing::new(Vec::with_capacity(3 + message.len() + 2 * sec_len));
    seed.extend_from_slice(&params.oid);
    seed.extend_from_slice(message);
    seed.extend_from_slice(b);
    seed.extend_from_slice(&packed_h[..sec_len.min(packed_h.len())]);
    seed
}

/// Blinding polynomial r sampled from `seed`
pub fn blinding_poly(params: NtruParamSet, seed: &[u8]) -> Result<NtruPoly> {
    NtruPoly::from_seed(
        params.xof_type(),
        seed,
        params.c_bits,
        params.n,
        params.q,
        params.df,
        params.df,
        params.is_product_form,
    )
}

/// Mask trits derived from `R mod 4`
pub fn mask(params: NtruParamSet, r: &[u16]) -> Result<NtruTrits> {
    let low_bits: Zeroizing<Vec<u16>> = Zeroizing::new(r.iter().map(|&x| x & 3).collect());
    let packed = Zeroizing::new(DefaultCoefficientSerde::pack_coeffs(&low_bits, 2)?);
    NtruTrits::generate(params.degree(), params.xof_type(), &packed)
}

/// Checks the weight of a masked message representative
///
/// Returns the weight correction `#(+1) - #(-1)` for product-form sets.
pub fn check_weight(params: NtruParamSet, trits: &[u8]) -> (bool, i32) {
    let min_wt = usize::from(params.min_msg_rep_wt);
    let mut counts = [0usize; 3];
    for &t in trits {
        counts[usize::from(t)] += 1;
    }

    if params.is_product_form {
        let m1 = counts[1] as i32 - counts[2] as i32;
        (m1.unsigned_abs() as usize <= min_wt, m1)
    } else {
        (counts.iter().all(|&c| c >= min_wt), 0)
    }
}

/// Adds `m1` to the last coefficient of `a` modulo `q`
pub fn adjust_last(a: &mut [u16], m1: i32, q: u16) {
    if let Some(last) = a.last_mut() {
        *last = (i32::from(*last) + m1).rem_euclid(i32::from(q)) as u16;
    }
}
