//! Textual encodings for chain key material.
//!
//! # Responsibilities
//! - Base58 and version-prefixed Base58Check encoding/decoding
//! - Variable-length integer encoding for the address version prefix
//! - The fixed 32-byte digest used for addresses and signing
//! - Address derivation from a public key
//!
//! # Compatibility
//! The hash function (blake3), the address version, and the derivation rule
//! in [`derive_address`] are network constants. Changing any of them breaks
//! compatibility with previously derived addresses.

use crate::keys::types::{KeyError, KeyResult};

/// Prefix of every textual address.
pub const ADDRESS_PREFIX: &str = "A";

/// Version byte embedded in addresses and checksummed key encodings.
pub const KEY_VERSION: u8 = 0;

/// Encode raw bytes as plain base58.
pub fn encode_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode plain base58 text into raw bytes.
pub fn decode_base58(text: &str) -> KeyResult<Vec<u8>> {
    bs58::decode(text)
        .into_vec()
        .map_err(|e| KeyError::Decode(e.to_string()))
}

/// Encode bytes as base58 with a version prefix and a 4-byte checksum.
pub fn encode_base58_check(bytes: &[u8], version: u8) -> String {
    bs58::encode(bytes).with_check_version(version).into_string()
}

/// Decode versioned, checksummed base58 text. The version byte is verified
/// and stripped from the returned payload.
pub fn decode_base58_check(text: &str, version: u8) -> KeyResult<Vec<u8>> {
    let decoded = bs58::decode(text)
        .with_check(Some(version))
        .into_vec()
        .map_err(|e| KeyError::Decode(e.to_string()))?;
    if decoded.is_empty() {
        return Err(KeyError::Decode("empty checksummed payload".to_string()));
    }
    Ok(decoded[1..].to_vec())
}

/// Unsigned LEB128 encoding.
pub fn encode_varint(mut n: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(10);
    loop {
        let byte = (n & 0x7f) as u8;
        n >>= 7;
        if n == 0 {
            out.push(byte);
            return out;
        }
        out.push(byte | 0x80);
    }
}

/// The chain's fixed 32-byte digest.
pub fn hash(bytes: &[u8]) -> [u8; 32] {
    *blake3::hash(bytes).as_bytes()
}

/// Derive the textual address for a public key:
/// `"A" + base58(varint(KEY_VERSION) ++ hash(public_key))`.
pub fn derive_address(public_key: &[u8]) -> String {
    let mut payload = encode_varint(KEY_VERSION as u64);
    payload.extend_from_slice(&hash(public_key));
    format!("{}{}", ADDRESS_PREFIX, encode_base58(&payload))
}
