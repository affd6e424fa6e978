//! Key-material error definitions.

use thiserror::Error;

/// Errors that can occur while decoding, deriving, or signing with key material.
#[derive(Debug, Error)]
pub enum KeyError {
    /// Malformed base58 input (bad alphabet, length, or checksum).
    #[error("base58 decode error: {0}")]
    Decode(String),

    /// A caller-supplied field disagrees with the value derived from the key.
    #[error("{field} does not match derived value: supplied {supplied}, derived {derived}")]
    Mismatch {
        field: &'static str,
        supplied: String,
        derived: String,
    },

    /// Neither a private key nor entropy is available where one is required.
    #[error("account holds neither a private key nor entropy")]
    MissingKeyMaterial,

    /// The signing backend produced a signature of the wrong length.
    #[error("signing backend produced a {0}-byte signature, expected 64")]
    InvalidSignatureLength(usize),

    /// A freshly produced signature failed verification against its own
    /// public key. Indicates a key-pair mismatch or a broken primitive.
    #[error("self-verification of a freshly produced signature failed")]
    SignatureVerification,
}

/// Result type for key-material operations.
pub type KeyResult<T> = Result<T, KeyError>;
