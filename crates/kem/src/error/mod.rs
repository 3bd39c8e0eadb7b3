//! Error handling for NTRU key exchange operations

use alloc::string::ToString;
use core::fmt;

use algorithms::error::Error as PrimitiveError;
use api::error::Error as CoreError;

/// Error type for KEM and key exchange operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Primitive error
    Primitive(PrimitiveError),

    /// Key pair generation failed
    KeyGeneration {
        /// Algorithm or parameter set name
        algorithm: &'static str,
        /// Failing step
        details: &'static str,
    },

    /// Encryption of the shared secret failed
    Encapsulation {
        /// Algorithm or parameter set name
        algorithm: &'static str,
        /// Failing step
        details: &'static str,
    },

    /// Decryption of a ciphertext failed
    Decapsulation {
        /// Algorithm or parameter set name
        algorithm: &'static str,
        /// Failing step
        details: &'static str,
    },

    /// Invalid key format
    InvalidKey {
        /// Kind of key
        key_type: &'static str,
        /// Why the key was rejected
        reason: &'static str,
    },

    /// Invalid ciphertext format
    InvalidCiphertext {
        /// Algorithm or parameter set name
        algorithm: &'static str,
        /// Why the ciphertext was rejected
        reason: &'static str,
    },

    /// Serialization/deserialization errors
    Serialization {
        /// Encoding being processed
        context: &'static str,
        /// Failing check
        details: &'static str,
    },

    /// Key exchange protocol violation
    KeyExchange {
        /// Negotiated method name
        method: &'static str,
        /// Failing check
        details: &'static str,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "Key generation error for {}: {}", algorithm, details)
            }
            Error::Encapsulation { algorithm, details } => {
                write!(f, "Encapsulation error for {}: {}", algorithm, details)
            }
            Error::Decapsulation { algorithm, details } => {
                write!(f, "Decapsulation error for {}: {}", algorithm, details)
            }
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
            Error::InvalidCiphertext { algorithm, reason } => {
                write!(f, "Invalid {} ciphertext: {}", algorithm, reason)
            }
            Error::Serialization { context, details } => {
                write!(f, "Serialization error in {}: {}", context, details)
            }
            Error::KeyExchange { method, details } => {
                write!(f, "Key exchange error for {}: {}", method, details)
            }
        }
    }
}

// Standard error trait
#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

// From PrimitiveError to Error
impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::KeyGeneration { algorithm, details } => CoreError::Other {
                context: algorithm,
                message: alloc::format!("key generation failed: {}", details),
            },
            Error::Encapsulation { algorithm, details } => CoreError::Other {
                context: algorithm,
                message: alloc::format!("encapsulation failed: {}", details),
            },
            Error::Decapsulation { algorithm, details } => CoreError::DecryptionFailed {
                context: algorithm,
                message: alloc::format!("decapsulation failed: {}", details),
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::InvalidCiphertext { algorithm, reason } => CoreError::InvalidCiphertext {
                context: algorithm,
                message: reason.to_string(),
            },
            Error::Serialization { context, details } => CoreError::SerializationError {
                context,
                message: details.to_string(),
            },
            Error::KeyExchange { method, details } => CoreError::InvalidState {
                context: method,
                message: details.to_string(),
            },
        }
    }
}

// Include validation submodule
pub mod validate;
