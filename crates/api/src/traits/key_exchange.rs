// File: crates/api/src/traits/key_exchange.rs

//! Trait definition for two-message key exchange methods
//!
//! A key exchange is driven symmetrically by both participants: each side
//! calls [`KeyExchange::public_key`] to obtain the bytes it sends and
//! [`KeyExchange::set_public_key`] with the bytes it receives. For a KEM-style
//! method the initiator sends a public key and the responder answers with a
//! ciphertext, but callers do not need to know which role they play.

use crate::Result;
use alloc::vec::Vec;
use zeroize::Zeroizing;

/// Trait for a stateful two-message key exchange.
///
/// # Security Requirements
/// - The local message must be memoized: calling `public_key` twice must not
///   generate fresh key material (retransmissions are byte-identical).
/// - A failed `set_public_key` must never leave a shared secret behind.
/// - Secret state must be zeroized when the session is dropped.
pub trait KeyExchange {
    /// Returns the name of the negotiated method, e.g. `NTRU_128`.
    fn method(&self) -> &'static str;

    /// Returns the local message to send to the peer.
    ///
    /// Generates key material on first use. A responder whose
    /// `set_public_key` failed returns an empty vector.
    fn public_key(&mut self) -> Result<Vec<u8>>;

    /// Processes the message received from the peer.
    fn set_public_key(&mut self, value: &[u8]) -> Result<()>;

    /// Returns the derived shared secret.
    ///
    /// Fails until a call to `set_public_key` has succeeded.
    fn shared_secret(&self) -> Result<Zeroizing<Vec<u8>>>;
}
