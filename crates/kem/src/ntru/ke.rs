// kem/src/ntru/ke.rs

//! IKE-style NTRU key exchange sessions.
//!
//! Both participants drive an [`NtruKe`] through the same two calls. The
//! side that asks for its public key first becomes the initiator and sends
//! an encoded public key; the side that is handed a public key first becomes
//! the responder, encrypts a fresh shared secret under it and answers with
//! the ciphertext.
//!
//! ```text
//! initiator                                  responder
//! public_key()      -- public key -->       set_public_key()
//! set_public_key()  <-- ciphertext --       public_key()
//! ```

use alloc::vec::Vec;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use algorithms::drbg::{Drbg, HmacDrbg};
use api::error::Result as ApiResult;
use api::KeyExchange;
use common::SecretVec;
use params::pqc::ntru::NTRU_KE_PERSONALIZATION;

use super::param_set::{NtruConfig, NtruParamSet, NtruProfile, NtruStrength};
use super::private_key::NtruPrivateKey;
use super::public_key::NtruPublicKey;
use crate::error::{validate, Error, Result};

/// Which half of the exchange a session plays
enum Role {
    /// Neither message has been produced or consumed yet
    Undetermined,
    /// Sent a public key and waits for the ciphertext
    Initiator { private_key: NtruPrivateKey },
    /// Received a public key; the ciphertext stays empty until encryption succeeds
    Responder { ciphertext: Vec<u8> },
}

/// NTRU key exchange session
///
/// The session owns its DRBG, so all key material and the shared secret are
/// derived from the entropy source given at construction. Once a shared
/// secret exists the session is finished and refuses further peer input.
pub struct NtruKe<R: RngCore + CryptoRng> {
    strength: NtruStrength,
    params: NtruParamSet,
    drbg: HmacDrbg<R>,
    role: Role,
    shared_secret: Option<SecretVec>,
}

impl<R: RngCore + CryptoRng> NtruKe<R> {
    /// Creates a session for `strength`, picking the parameter set from `profile`
    ///
    /// The DRBG is instantiated at the strength of the selected parameter set
    /// with `entropy` as its entropy source.
    pub fn new(strength: NtruStrength, profile: NtruProfile, entropy: R) -> Result<Self> {
        let params = NtruParamSet::for_profile(profile, strength);
        let drbg = HmacDrbg::new(
            u32::from(params.sec_strength_len) * 8,
            entropy,
            NTRU_KE_PERSONALIZATION,
        )?;

        Ok(Self {
            strength,
            params,
            drbg,
            role: Role::Undetermined,
            shared_secret: None,
        })
    }

    /// Creates a session from an explicit configuration
    pub fn from_config(config: &NtruConfig, entropy: R) -> Result<Self> {
        Self::new(config.strength, config.profile, entropy)
    }

    /// Parameter set negotiated for this session
    pub fn param_set(&self) -> NtruParamSet {
        self.params
    }

    /// Security strength of the session
    pub fn strength(&self) -> NtruStrength {
        self.strength
    }

    /// True once this session has produced its own public key
    pub fn is_initiator(&self) -> bool {
        matches!(self.role, Role::Initiator { .. })
    }

    /// True once this session has been handed the peer's public key first
    pub fn is_responder(&self) -> bool {
        matches!(self.role, Role::Responder { .. })
    }

    /// True once a shared secret has been derived
    pub fn has_shared_secret(&self) -> bool {
        self.shared_secret.is_some()
    }

    fn decapsulate(&mut self, ciphertext: &[u8]) -> Result<()> {
        let method = self.strength.method_name();
        let private_key = match &self.role {
            Role::Initiator { private_key } => private_key,
            _ => {
                return Err(Error::KeyExchange {
                    method,
                    details: "no private key to decrypt with",
                })
            }
        };
        let params = private_key.param_set();
        validate::ciphertext(
            ciphertext.len() == params.ring_element_len(),
            params.name,
            "ciphertext length does not match the parameter set",
        )?;

        let secret = private_key.decrypt(ciphertext)?;
        self.shared_secret = Some(SecretVec::from_slice(&secret));
        Ok(())
    }

    fn encapsulate(&mut self, public_key: &[u8]) -> Result<()> {
        let method = self.strength.method_name();
        self.role = Role::Responder {
            ciphertext: Vec::new(),
        };

        let peer = NtruPublicKey::decode(public_key)?;
        validate::key_exchange(
            peer.id() == self.params.id,
            method,
            "peer public key uses a different parameter set",
        )?;

        let secret = SecretVec::new(self.drbg.generate_vec(self.strength.shared_secret_len())?);
        let ciphertext = peer.encrypt(&mut self.drbg, secret.as_slice())?;

        self.role = Role::Responder { ciphertext };
        self.shared_secret = Some(secret);
        Ok(())
    }
}

#[cfg(feature = "std")]
impl NtruKe<rand::rngs::OsRng> {
    /// Creates a session seeded from the operating system
    pub fn with_os_entropy(strength: NtruStrength, profile: NtruProfile) -> Result<Self> {
        Self::new(strength, profile, rand::rngs::OsRng)
    }
}

impl<R: RngCore + CryptoRng> KeyExchange for NtruKe<R> {
    fn method(&self) -> &'static str {
        self.strength.method_name()
    }

    fn public_key(&mut self) -> ApiResult<Vec<u8>> {
        match &self.role {
            Role::Initiator { private_key } => Ok(private_key.public_key().encoding().to_vec()),
            Role::Responder { ciphertext } => Ok(ciphertext.clone()),
            Role::Undetermined => {
                let private_key = NtruPrivateKey::generate(&mut self.drbg, self.params)?;
                let encoding = private_key.public_key().encoding().to_vec();
                self.role = Role::Initiator { private_key };
                Ok(encoding)
            }
        }
    }

    fn set_public_key(&mut self, value: &[u8]) -> ApiResult<()> {
        validate::key_exchange(
            self.shared_secret.is_none(),
            self.strength.method_name(),
            "shared secret already derived",
        )?;

        if self.is_initiator() {
            self.decapsulate(value)?;
        } else {
            self.encapsulate(value)?;
        }
        Ok(())
    }

    fn shared_secret(&self) -> ApiResult<Zeroizing<Vec<u8>>> {
        self.shared_secret
            .as_ref()
            .map(SecretVec::to_zeroizing)
            .ok_or_else(|| {
                Error::KeyExchange {
                    method: self.strength.method_name(),
                    details: "no shared secret derived",
                }
                .into()
            })
    }
}

impl<R: RngCore + CryptoRng> core::fmt::Debug for NtruKe<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let role = match self.role {
            Role::Undetermined => "undetermined",
            Role::Initiator { .. } => "initiator",
            Role::Responder { .. } => "responder",
        };
        f.debug_struct("NtruKe")
            .field("method", &self.strength.method_name())
            .field("params", &self.params)
            .field("role", &role)
            .field("has_shared_secret", &self.shared_secret.is_some())
            .finish()
    }
}
