//! Account construction and key derivation.
//!
//! # Security
//! - Private keys and entropy are never logged
//! - Accounts are immutable once constructed
//!
//! All construction paths are pure: decode the supplied material, derive the
//! rest, and cross-check anything the caller supplied on top.

use ed25519_dalek::{SigningKey, SECRET_KEY_LENGTH};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::keys::codec;
use crate::keys::types::{KeyError, KeyResult};

/// A key-material identity: address, public key, and the secret material
/// that produced them.
///
/// An account missing both `private_key` and `random_entropy` is read-only:
/// it can be displayed and enriched with node data but cannot sign.
///
/// Deliberately not serializable: the secret fields stay in process memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Textual address, derivable from `public_key`.
    pub address: String,
    /// Checksummed base58 encoding of the public key.
    pub public_key: String,
    /// Checksummed base58 encoding of the private key, if held.
    pub private_key: Option<String>,
    /// The entropy the private key was derived from, if the account was
    /// created from a seed.
    pub random_entropy: Option<String>,
}

/// Caller-supplied account material for [`Account::reconcile`]. Any subset
/// of fields may be present; at least one of `private_key` or
/// `random_entropy` is required.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PartialAccount {
    pub address: Option<String>,
    pub public_key: Option<String>,
    pub private_key: Option<String>,
    pub random_entropy: Option<String>,
}

impl From<Account> for PartialAccount {
    fn from(account: Account) -> Self {
        Self {
            address: Some(account.address),
            public_key: Some(account.public_key),
            private_key: account.private_key,
            random_entropy: account.random_entropy,
        }
    }
}

impl Account {
    /// Build an account from a checksummed base58 private key.
    pub fn from_private_key(private_key: &str) -> KeyResult<Self> {
        let signing_key = signing_key_from_text(private_key)?;
        let verifying_key = signing_key.verifying_key();
        let public_key =
            codec::encode_base58_check(verifying_key.as_bytes(), codec::KEY_VERSION);
        let address = codec::derive_address(verifying_key.as_bytes());

        Ok(Self {
            address,
            public_key,
            private_key: Some(private_key.to_string()),
            random_entropy: None,
        })
    }

    /// Build an account from a checksummed base58 entropy seed. The private
    /// key is the digest of the entropy bytes, so the derivation is
    /// deterministic.
    pub fn from_entropy(entropy: &str) -> KeyResult<Self> {
        let entropy_bytes = codec::decode_base58_check(entropy, codec::KEY_VERSION)?;
        let seed = codec::hash(&entropy_bytes);
        let private_key = codec::encode_base58_check(&seed, codec::KEY_VERSION);

        let mut account = Self::from_private_key(&private_key)?;
        account.random_entropy = Some(entropy.to_string());
        Ok(account)
    }

    /// Generate a fresh account from 32 bytes of OS randomness.
    pub fn generate() -> KeyResult<Self> {
        let mut entropy = [0u8; 32];
        OsRng.fill_bytes(&mut entropy);
        let entropy_text = codec::encode_base58_check(&entropy, codec::KEY_VERSION);
        Self::from_entropy(&entropy_text)
    }

    /// Resolve caller-supplied account material into a consistent account.
    ///
    /// Requires at least entropy or a private key. Missing fields are
    /// derived; supplied `public_key` / `address` values must exactly equal
    /// the derived ones or the call fails with [`KeyError::Mismatch`], as
    /// must the private key when entropy is supplied alongside it.
    /// Inconsistent material is never silently overwritten.
    pub fn reconcile(partial: &PartialAccount) -> KeyResult<Self> {
        let derived = match (&partial.private_key, &partial.random_entropy) {
            (Some(private_key), Some(entropy)) => {
                // both supplied: the entropy must produce that private key.
                // Compared through the public keys so no secret ends up in
                // the error message.
                let account = Self::from_private_key(private_key)?;
                let from_entropy = Self::from_entropy(entropy)?;
                if from_entropy.public_key != account.public_key {
                    return Err(KeyError::Mismatch {
                        field: "entropy-derived public key",
                        supplied: from_entropy.public_key,
                        derived: account.public_key,
                    });
                }
                from_entropy
            }
            (Some(private_key), None) => Self::from_private_key(private_key)?,
            (None, Some(entropy)) => Self::from_entropy(entropy)?,
            (None, None) => return Err(KeyError::MissingKeyMaterial),
        };

        if let Some(supplied) = &partial.public_key {
            if *supplied != derived.public_key {
                return Err(KeyError::Mismatch {
                    field: "public key",
                    supplied: supplied.clone(),
                    derived: derived.public_key,
                });
            }
        }
        if let Some(supplied) = &partial.address {
            if *supplied != derived.address {
                return Err(KeyError::Mismatch {
                    field: "address",
                    supplied: supplied.clone(),
                    derived: derived.address,
                });
            }
        }

        Ok(derived)
    }

    /// Whether this account holds material it can sign with.
    pub fn can_sign(&self) -> bool {
        self.private_key.is_some() || self.random_entropy.is_some()
    }
}

/// Decode a checksummed base58 private key into a signing key.
pub(crate) fn signing_key_from_text(private_key: &str) -> KeyResult<SigningKey> {
    let bytes = codec::decode_base58_check(private_key, codec::KEY_VERSION)?;
    let seed: [u8; SECRET_KEY_LENGTH] = bytes.as_slice().try_into().map_err(|_| {
        KeyError::Decode(format!(
            "private key is {} bytes, expected {}",
            bytes.len(),
            SECRET_KEY_LENGTH
        ))
    })?;
    Ok(SigningKey::from_bytes(&seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_private_key() -> String {
        codec::encode_base58_check(&[42u8; 32], codec::KEY_VERSION)
    }

    fn test_entropy() -> String {
        codec::encode_base58_check(&[7u8; 32], codec::KEY_VERSION)
    }

    #[test]
    fn test_from_private_key_is_deterministic() {
        let a = Account::from_private_key(&test_private_key()).unwrap();
        let b = Account::from_private_key(&test_private_key()).unwrap();
        assert_eq!(a, b);
        assert!(a.address.starts_with(codec::ADDRESS_PREFIX));
        assert!(a.random_entropy.is_none());
        assert!(a.can_sign());
    }

    #[test]
    fn test_entropy_and_private_key_agree() {
        let from_entropy = Account::from_entropy(&test_entropy()).unwrap();
        let from_key =
            Account::from_private_key(from_entropy.private_key.as_ref().unwrap()).unwrap();

        assert_eq!(from_entropy.address, from_key.address);
        assert_eq!(from_entropy.public_key, from_key.public_key);
        assert_eq!(from_entropy.random_entropy.as_deref(), Some(test_entropy().as_str()));
    }

    #[test]
    fn test_generate_yields_distinct_accounts() {
        let a = Account::generate().unwrap();
        let b = Account::generate().unwrap();
        assert_ne!(a.address, b.address);
        assert!(a.random_entropy.is_some());
    }

    #[test]
    fn test_reconcile_derives_missing_fields() {
        let expected = Account::from_private_key(&test_private_key()).unwrap();
        let partial = PartialAccount {
            private_key: Some(test_private_key()),
            ..Default::default()
        };
        assert_eq!(Account::reconcile(&partial).unwrap(), expected);
    }

    #[test]
    fn test_reconcile_accepts_matching_supplied_fields() {
        let expected = Account::from_private_key(&test_private_key()).unwrap();
        let partial = PartialAccount::from(expected.clone());
        assert_eq!(Account::reconcile(&partial).unwrap(), expected);
    }

    #[test]
    fn test_reconcile_accepts_entropy_with_its_own_private_key() {
        let from_entropy = Account::from_entropy(&test_entropy()).unwrap();
        let partial = PartialAccount {
            private_key: from_entropy.private_key.clone(),
            random_entropy: Some(test_entropy()),
            ..Default::default()
        };
        assert_eq!(Account::reconcile(&partial).unwrap(), from_entropy);
    }

    #[test]
    fn test_reconcile_rejects_entropy_for_another_key() {
        let partial = PartialAccount {
            private_key: Some(test_private_key()),
            random_entropy: Some(test_entropy()),
            ..Default::default()
        };
        assert!(matches!(
            Account::reconcile(&partial),
            Err(KeyError::Mismatch { field: "entropy-derived public key", .. })
        ));
    }

    #[test]
    fn test_reconcile_rejects_foreign_public_key() {
        let other = Account::from_entropy(&test_entropy()).unwrap();
        let partial = PartialAccount {
            private_key: Some(test_private_key()),
            public_key: Some(other.public_key),
            ..Default::default()
        };
        assert!(matches!(
            Account::reconcile(&partial),
            Err(KeyError::Mismatch { field: "public key", .. })
        ));
    }

    #[test]
    fn test_reconcile_rejects_foreign_address() {
        let other = Account::from_entropy(&test_entropy()).unwrap();
        let partial = PartialAccount {
            private_key: Some(test_private_key()),
            address: Some(other.address),
            ..Default::default()
        };
        assert!(matches!(
            Account::reconcile(&partial),
            Err(KeyError::Mismatch { field: "address", .. })
        ));
    }

    #[test]
    fn test_reconcile_requires_key_material() {
        let partial = PartialAccount {
            address: Some("A12345".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            Account::reconcile(&partial),
            Err(KeyError::MissingKeyMaterial)
        ));
    }

    #[test]
    fn test_invalid_private_key_text() {
        assert!(Account::from_private_key("not base58 0OIl").is_err());
    }
}
