//! Payload signing.
//!
//! # Responsibilities
//! - Digest arbitrary payload bytes with the chain's fixed hash
//! - Produce a deterministic 64-byte signature over the digest
//! - Self-verify every signature before handing it out
//!
//! # Design Decisions
//! - Signing is deterministic: identical payload and key always produce the
//!   same signature, so repeated calls are reproducible
//! - Every signature is verified against the account's own public key before
//!   it is returned; a mismatched key pair fails locally instead of at the
//!   node

use ed25519_dalek::{Signature as RawSignature, Signer, Verifier, VerifyingKey, SIGNATURE_LENGTH};

use crate::keys::account::{signing_key_from_text, Account};
use crate::keys::codec;
use crate::keys::types::{KeyError, KeyResult};

/// A signature over a payload digest, in its two textual encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Hex encoding of the 64 signature bytes.
    pub hex: String,
    /// Plain base58 encoding of the same bytes.
    pub base58_encoded: String,
}

/// Sign a payload with an account's private key.
///
/// The payload is digested, signed, length-checked, and verified against the
/// account's public key before the signature is returned.
pub fn sign(payload: &[u8], account: &Account) -> KeyResult<Signature> {
    let private_key = account
        .private_key
        .as_deref()
        .ok_or(KeyError::MissingKeyMaterial)?;
    let signing_key = signing_key_from_text(private_key)?;

    let digest = codec::hash(payload);
    let raw = signing_key.sign(&digest);
    let bytes = raw.to_bytes();

    if bytes.len() != SIGNATURE_LENGTH {
        return Err(KeyError::InvalidSignatureLength(bytes.len()));
    }
    if !verify(&bytes, payload, &account.public_key)? {
        return Err(KeyError::SignatureVerification);
    }

    Ok(Signature {
        hex: hex::encode(bytes),
        base58_encoded: codec::encode_base58(&bytes),
    })
}

/// Verify signature bytes over a payload against a textual public key.
pub fn verify(signature: &[u8], payload: &[u8], public_key: &str) -> KeyResult<bool> {
    let key_bytes = codec::decode_base58_check(public_key, codec::KEY_VERSION)?;
    let key_array: [u8; 32] = key_bytes.as_slice().try_into().map_err(|_| {
        KeyError::Decode(format!("public key is {} bytes, expected 32", key_bytes.len()))
    })?;
    let verifying_key = VerifyingKey::from_bytes(&key_array)
        .map_err(|e| KeyError::Decode(format!("invalid public key: {e}")))?;
    let raw = RawSignature::from_slice(signature)
        .map_err(|e| KeyError::Decode(format!("invalid signature bytes: {e}")))?;

    let digest = codec::hash(payload);
    Ok(verifying_key.verify(&digest, &raw).is_ok())
}
