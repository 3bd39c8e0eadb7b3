// kem/src/ntru/mod.rs

//! NTRU encryption (EES parameter sets, SVES padding) and the key exchange
//! built on top of it.
//!
//! Sessions are the usual entry point; the key types and polynomial
//! arithmetic are public for callers that need to inspect or persist keys.

mod encoding;   // Key blob headers and trit/bit conversions
mod ke;         // Two-message key exchange session
mod param_set;  // Parameter-set lookup and profile selection
mod poly;       // Sparse trinary polynomials and ring multiplication
mod private_key;
mod public_key;
mod ring;       // Dense ring arithmetic and inversion
mod sves;       // Padding steps shared by encryption and decryption
mod trits;      // XOF-driven trit generation

pub use self::encoding::KeyBlobTag;
pub use self::ke::NtruKe;
pub use self::param_set::{NtruConfig, NtruParamSet, NtruProfile, NtruStrength, KEY_HEADER_LEN};
pub use self::poly::{NtruPoly, MAX_INDEX_DRAWS};
pub use self::private_key::NtruPrivateKey;
pub use self::public_key::NtruPublicKey;
pub use self::ring::{inverse as ring_inverse, mult as ring_mult};
pub use self::trits::NtruTrits;

#[cfg(test)]
mod test_vectors;
