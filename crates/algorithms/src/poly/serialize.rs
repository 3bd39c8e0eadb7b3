//! serialize.rs - MSB-first coefficient packing and unpacking

use alloc::vec::Vec;

use crate::error::{validate, Error, Result};

/// Largest coefficient width supported by the packers
pub const MAX_BITS_PER_COEFF: usize = 16;

/// Trait for packing coefficients into a byte array
pub trait CoefficientPacker {
    /// Packs the low `bits_per_coeff` bits of every coefficient
    fn pack_coeffs(coeffs: &[u16], bits_per_coeff: usize) -> Result<Vec<u8>>;
}

/// Trait for unpacking coefficients from a byte array
pub trait CoefficientUnpacker {
    /// Unpacks `count` coefficients from the front of `bytes`
    ///
    /// The unused low bits of the last byte consumed must be zero.
    fn unpack_coeffs(bytes: &[u8], count: usize, bits_per_coeff: usize) -> Result<Vec<u16>>;
}

/// Default implementation for coefficient serialization
pub struct DefaultCoefficientSerde;

fn check_width(bits_per_coeff: usize) -> Result<()> {
    if bits_per_coeff == 0 || bits_per_coeff > MAX_BITS_PER_COEFF {
        return Err(Error::param(
            "bits_per_coeff",
            alloc::format!("must be in range [1, 16], got {}", bits_per_coeff),
        ));
    }
    Ok(())
}

impl CoefficientPacker for DefaultCoefficientSerde {
    fn pack_coeffs(coeffs: &[u16], bits_per_coeff: usize) -> Result<Vec<u8>> {
        check_width(bits_per_coeff)?;

        let mut packed = Vec::with_capacity(packed_len(coeffs.len(), bits_per_coeff));
        let mask = (1u32 << bits_per_coeff) - 1;
        let mut acc = 0u32;
        let mut acc_bits = 0;

        for &coeff in coeffs {
            acc = (acc << bits_per_coeff) | (u32::from(coeff) & mask);
            acc_bits += bits_per_coeff;
            while acc_bits >= 8 {
                acc_bits -= 8;
                packed.push((acc >> acc_bits) as u8);
            }
            acc &= (1u32 << acc_bits) - 1;
        }
        if acc_bits > 0 {
            packed.push((acc << (8 - acc_bits)) as u8);
        }

        Ok(packed)
    }
}

impl CoefficientUnpacker for DefaultCoefficientSerde {
    fn unpack_coeffs(bytes: &[u8], count: usize, bits_per_coeff: usize) -> Result<Vec<u16>> {
        check_width(bits_per_coeff)?;
        validate::min_length("coefficient unpacking", bytes.len(), packed_len(count, bits_per_coeff))?;

        let mut coeffs = Vec::with_capacity(count);
        let mask = (1u32 << bits_per_coeff) - 1;
        let mut acc = 0u32;
        let mut acc_bits = 0;
        let mut input = bytes.iter();

        while coeffs.len() < count {
            while acc_bits < bits_per_coeff {
                // length was validated above
                let byte = input.next().copied().unwrap_or(0);
                acc = (acc << 8) | u32::from(byte);
                acc_bits += 8;
            }
            acc_bits -= bits_per_coeff;
            coeffs.push(((acc >> acc_bits) & mask) as u16);
            acc &= (1u32 << acc_bits) - 1;
        }
        validate::parameter(acc == 0, "padding", "nonzero pad bits after the last coefficient")?;

        Ok(coeffs)
    }
}

/// Number of bytes needed to pack `count` coefficients of `bits_per_coeff` bits
pub const fn packed_len(count: usize, bits_per_coeff: usize) -> usize {
    (count * bits_per_coeff).div_ceil(8)
}
