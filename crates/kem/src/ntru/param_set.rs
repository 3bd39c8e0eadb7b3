// kem/src/ntru/param_set.rs

//! Parameter-set lookup and profile selection.
//!
//! The compiled table lives in `params::pqc::ntru`; this module wraps a table
//! entry in [`NtruParamSet`] and adds the lengths and selectors derived from
//! it. Sessions pick their set through an [`NtruProfile`] and an
//! [`NtruStrength`], usually bundled as an [`NtruConfig`].

use core::fmt;
use core::ops::Deref;
use core::str::FromStr;

use algorithms::poly::serialize::packed_len;
use algorithms::xof::XofType;
use params::pqc::ntru::{
    NtruEesParams, NTRU_EES_PARAMS, NTRU_OID_LEN, NTRU_PROFILE_OPTIMUM,
    NTRU_PROFILE_X9_98_BALANCE, NTRU_PROFILE_X9_98_BANDWIDTH, NTRU_PROFILE_X9_98_SPEED,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Length of the `[tag][oid_len][oid]` header of every key blob
pub const KEY_HEADER_LEN: usize = 2 + NTRU_OID_LEN;

/// Sets with a security strength of at most this many bytes use MGF1-SHA1
const SHA1_MAX_STRENGTH_LEN: u16 = 20;

/// A validated reference into the EES parameter table
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct NtruParamSet(&'static NtruEesParams);

impl NtruParamSet {
    /// Looks a set up by its table identifier
    ///
    /// Returns `None` for negative identifiers and identifiers past the end
    /// of the table.
    pub fn by_id(id: i32) -> Option<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|index| NTRU_EES_PARAMS.get(index))
            .map(NtruParamSet)
    }

    /// Looks a set up by the object identifier carried in key blobs
    pub fn by_oid(oid: &[u8]) -> Option<Self> {
        NTRU_EES_PARAMS
            .iter()
            .find(|params| params.oid[..] == *oid)
            .map(NtruParamSet)
    }

    /// The set a profile assigns to a security strength
    pub fn for_profile(profile: NtruProfile, strength: NtruStrength) -> Self {
        let id = profile.param_set_ids()[strength.index()];
        NtruParamSet(&NTRU_EES_PARAMS[id as usize])
    }

    /// The underlying table entry
    pub fn params(&self) -> &'static NtruEesParams {
        self.0
    }

    /// Security strength in bits
    pub fn strength_bits(&self) -> u32 {
        u32::from(self.0.sec_strength_len) * 8
    }

    /// XOF used for trit and index generation
    pub fn xof_type(&self) -> XofType {
        if self.0.sec_strength_len <= SHA1_MAX_STRENGTH_LEN {
            XofType::Mgf1Sha1
        } else {
            XofType::Mgf1Sha256
        }
    }

    /// Ring degree as a `usize`
    pub fn degree(&self) -> usize {
        usize::from(self.0.n)
    }

    /// Number of trits carrying the SVES message representative
    ///
    /// Product-form sets reserve the last coefficient for the weight
    /// correction term.
    pub fn message_trits(&self) -> usize {
        if self.0.is_product_form {
            self.degree() - 1
        } else {
            self.degree()
        }
    }

    /// Number of +1 and -1 indices of the private polynomial, per factor
    pub fn factor_counts(&self) -> ([u32; 3], usize) {
        if self.0.is_product_form {
            let df = self.0.df;
            ([df & 0xff, (df >> 8) & 0xff, (df >> 16) & 0xff], 3)
        } else {
            ([self.0.df, 0, 0], 1)
        }
    }

    /// Total number of indices stored for the private polynomial
    pub fn private_index_count(&self) -> usize {
        let (counts, factors) = self.factor_counts();
        counts[..factors].iter().map(|&c| 2 * c as usize).sum()
    }

    /// Length of a packed ring element (and of a ciphertext)
    pub fn ring_element_len(&self) -> usize {
        packed_len(self.degree(), usize::from(self.0.q_bits))
    }

    /// Length of an encoded public key
    pub fn public_key_len(&self) -> usize {
        KEY_HEADER_LEN + self.ring_element_len()
    }

    /// Length of the secret payload of an encoded private key
    pub fn private_payload_len(&self) -> usize {
        if self.0.is_product_form {
            packed_len(self.private_index_count(), usize::from(self.0.n_bits))
        } else {
            self.degree().div_ceil(5)
        }
    }

    /// Length of an encoded private key
    pub fn private_key_len(&self) -> usize {
        self.public_key_len() + self.private_payload_len()
    }
}

impl Deref for NtruParamSet {
    type Target = NtruEesParams;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl fmt::Debug for NtruParamSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NtruParamSet({})", self.0.name)
    }
}

impl fmt::Display for NtruParamSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name)
    }
}

/// Named mapping from security strength to parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NtruProfile {
    /// Product-form sets, smallest and fastest
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "optimum"))]
    Optimum,
    /// X9.98 sets tuned for speed
    #[cfg_attr(feature = "serde", serde(rename = "x9_98_speed"))]
    X998Speed,
    /// X9.98 sets tuned for bandwidth
    #[cfg_attr(feature = "serde", serde(rename = "x9_98_bandwidth"))]
    X998Bandwidth,
    /// X9.98 sets balancing speed and bandwidth
    #[cfg_attr(feature = "serde", serde(rename = "x9_98_balance"))]
    X998Balance,
}

impl NtruProfile {
    /// Every profile, in table order
    pub const ALL: [NtruProfile; 4] = [
        NtruProfile::X998Speed,
        NtruProfile::X998Bandwidth,
        NtruProfile::X998Balance,
        NtruProfile::Optimum,
    ];

    /// Configuration name of the profile
    pub fn name(&self) -> &'static str {
        match self {
            NtruProfile::Optimum => "optimum",
            NtruProfile::X998Speed => "x9_98_speed",
            NtruProfile::X998Bandwidth => "x9_98_bandwidth",
            NtruProfile::X998Balance => "x9_98_balance",
        }
    }

    fn param_set_ids(&self) -> &'static [u8; 4] {
        match self {
            NtruProfile::Optimum => &NTRU_PROFILE_OPTIMUM,
            NtruProfile::X998Speed => &NTRU_PROFILE_X9_98_SPEED,
            NtruProfile::X998Bandwidth => &NTRU_PROFILE_X9_98_BANDWIDTH,
            NtruProfile::X998Balance => &NTRU_PROFILE_X9_98_BALANCE,
        }
    }
}

impl fmt::Display for NtruProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NtruProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NtruProfile::ALL
            .iter()
            .copied()
            .find(|profile| profile.name() == s)
            .ok_or_else(|| {
                Error::Primitive(algorithms::Error::param(
                    "profile",
                    "unknown NTRU parameter set profile",
                ))
            })
    }
}

/// Security strength of an NTRU key exchange method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum NtruStrength {
    /// 112-bit security (`NTRU_112`)
    Bits112,
    /// 128-bit security (`NTRU_128`)
    Bits128,
    /// 192-bit security (`NTRU_192`)
    Bits192,
    /// 256-bit security (`NTRU_256`)
    Bits256,
}

impl NtruStrength {
    /// Every strength, in ascending order
    pub const ALL: [NtruStrength; 4] = [
        NtruStrength::Bits112,
        NtruStrength::Bits128,
        NtruStrength::Bits192,
        NtruStrength::Bits256,
    ];

    /// Strength in bits
    pub fn bits(&self) -> u32 {
        match self {
            NtruStrength::Bits112 => 112,
            NtruStrength::Bits128 => 128,
            NtruStrength::Bits192 => 192,
            NtruStrength::Bits256 => 256,
        }
    }

    /// Key exchange method name
    pub fn method_name(&self) -> &'static str {
        match self {
            NtruStrength::Bits112 => "NTRU_112",
            NtruStrength::Bits128 => "NTRU_128",
            NtruStrength::Bits192 => "NTRU_192",
            NtruStrength::Bits256 => "NTRU_256",
        }
    }

    /// Length of the shared secret in bytes
    pub fn shared_secret_len(&self) -> usize {
        2 * self.bits() as usize / 8
    }

    fn index(&self) -> usize {
        match self {
            NtruStrength::Bits112 => 0,
            NtruStrength::Bits128 => 1,
            NtruStrength::Bits192 => 2,
            NtruStrength::Bits256 => 3,
        }
    }
}

impl TryFrom<u32> for NtruStrength {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        NtruStrength::ALL
            .iter()
            .copied()
            .find(|strength| strength.bits() == bits)
            .ok_or_else(|| {
                Error::Primitive(algorithms::Error::param(
                    "strength",
                    alloc::format!("no NTRU method with {} bits of security", bits),
                ))
            })
    }
}

impl From<NtruStrength> for u32 {
    fn from(strength: NtruStrength) -> u32 {
        strength.bits()
    }
}

impl fmt::Display for NtruStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

/// Explicit session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NtruConfig {
    /// Requested security strength
    pub strength: NtruStrength,
    /// Profile mapping the strength to a parameter set
    #[cfg_attr(feature = "serde", serde(default))]
    pub profile: NtruProfile,
}

impl NtruConfig {
    /// Configuration for `strength` with the default profile
    pub fn new(strength: NtruStrength) -> Self {
        Self {
            strength,
            profile: NtruProfile::default(),
        }
    }

    /// Replaces the profile
    pub fn with_profile(mut self, profile: NtruProfile) -> Self {
        self.profile = profile;
        self
    }

    /// The parameter set this configuration selects
    pub fn param_set(&self) -> NtruParamSet {
        NtruParamSet::for_profile(self.profile, self.strength)
    }
}
