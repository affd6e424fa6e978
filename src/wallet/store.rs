//! In-memory account collection with signing.
//!
//! # Responsibilities
//! - Own an insertion-ordered set of accounts, unique by address
//! - Track an optional base account (the default signer)
//! - Sign payloads on behalf of members
//! - Merge members with node-side ledger records
//!
//! # Design Decisions
//! - Uniqueness compares addresses case-insensitively; the normalized form
//!   is only a map key, never shown to callers
//! - Enumeration order is insertion order and is part of the contract
//! - No interior mutability: a wallet shared across tasks goes behind the
//!   caller's own mutex, which also serializes mutations as required

use std::collections::HashMap;

use crate::keys::{signing, Account, PartialAccount, Signature};
use crate::rpc::AddressInfoProvider;
use crate::wallet::types::{FullAccountView, WalletError, WalletResult, MAX_ACCOUNTS_PER_BATCH};

fn normalize(address: &str) -> String {
    address.to_ascii_lowercase()
}

/// An ordered collection of accounts plus an optional base account.
#[derive(Debug, Default)]
pub struct Wallet {
    accounts: Vec<Account>,
    /// Normalized address → position in `accounts`.
    index: HashMap<String, usize>,
    /// Normalized address of the base account. Always a member when set.
    base: Option<String>,
}

impl Wallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive and add one account per private key, skipping addresses
    /// already present. Returns the accounts actually added, in input order.
    pub fn add_from_private_keys(&mut self, keys: &[String]) -> WalletResult<Vec<Account>> {
        self.check_batch_size(keys.len())?;

        let mut added = Vec::new();
        for key in keys {
            let account = Account::from_private_key(key)?;
            if self.insert(account.clone()) {
                added.push(account);
            }
        }

        tracing::info!(requested = keys.len(), added = added.len(), "Accounts added from private keys");
        Ok(added)
    }

    /// Reconcile and add caller-supplied account material, with the same cap
    /// and dedup rules as [`Wallet::add_from_private_keys`].
    pub fn add_accounts(&mut self, partials: &[PartialAccount]) -> WalletResult<Vec<Account>> {
        self.check_batch_size(partials.len())?;

        let mut added = Vec::new();
        for partial in partials {
            let account = Account::reconcile(partial)?;
            if self.insert(account.clone()) {
                added.push(account);
            }
        }

        tracing::info!(requested = partials.len(), added = added.len(), "Accounts added");
        Ok(added)
    }

    /// Remove members by address. Addresses not present are ignored.
    pub fn remove_by_addresses(&mut self, addresses: &[String]) {
        for address in addresses {
            let key = normalize(address);
            if let Some(position) = self.index.remove(&key) {
                self.accounts.remove(position);
                if self.base.as_deref() == Some(key.as_str()) {
                    self.base = None;
                }
                // positions after the removed slot shifted down by one
                for slot in self.index.values_mut() {
                    if *slot > position {
                        *slot -= 1;
                    }
                }
                tracing::info!(address = %address, "Account removed");
            }
        }
    }

    /// Look up a member by address, case-insensitively.
    pub fn find_by_address(&self, address: &str) -> Option<&Account> {
        self.index
            .get(&normalize(address))
            .map(|&position| &self.accounts[position])
    }

    /// The wallet's default signer, if one is designated.
    pub fn base_account(&self) -> Option<&Account> {
        let key = self.base.as_deref()?;
        self.index.get(key).map(|&position| &self.accounts[position])
    }

    /// Designate an account as the base account, adding it first if no
    /// member with that address exists. When a member already exists, the
    /// wallet's stored copy stays authoritative over the passed-in value.
    pub fn set_base_account(&mut self, account: Account) -> WalletResult<()> {
        let key = normalize(&account.address);
        if !self.index.contains_key(&key) {
            self.add_accounts(&[PartialAccount::from(account)])?;
        }
        if let Some(member) = self.find_by_address(&key) {
            tracing::info!(address = %member.address, "Base account set");
        }
        self.base = Some(key);
        Ok(())
    }

    /// Sign a payload with the member holding `signer_address`.
    pub fn sign(&self, payload: &[u8], signer_address: &str) -> WalletResult<Signature> {
        let account = self
            .find_by_address(signer_address)
            .ok_or_else(|| WalletError::UnknownSigner(signer_address.to_string()))?;
        Ok(signing::sign(payload, account)?)
    }

    /// Sign a payload with the base account.
    pub fn sign_with_base(&self, payload: &[u8]) -> WalletResult<Signature> {
        let account = self.base_account().ok_or(WalletError::NoBaseAccount)?;
        Ok(signing::sign(payload, account)?)
    }

    /// Merge every member with its node-side ledger record.
    ///
    /// The node's batch response must contain exactly one record per
    /// requested address; anything else fails rather than passing a partial
    /// result off as complete.
    pub async fn wallet_info<P: AddressInfoProvider>(
        &self,
        provider: &P,
    ) -> WalletResult<Vec<FullAccountView>> {
        if self.accounts.is_empty() {
            return Ok(Vec::new());
        }

        let addresses: Vec<String> = self.accounts.iter().map(|a| a.address.clone()).collect();
        let infos = provider.fetch_address_info(&addresses).await?;
        if infos.len() != addresses.len() {
            return Err(WalletError::IncompleteResponse {
                expected: addresses.len(),
                actual: infos.len(),
            });
        }

        let mut by_address: HashMap<String, _> = infos
            .into_iter()
            .map(|info| (normalize(&info.address), info))
            .collect();

        let mut views = Vec::with_capacity(self.accounts.len());
        for account in &self.accounts {
            match by_address.remove(&normalize(&account.address)) {
                Some(info) => views.push(FullAccountView {
                    account: account.clone(),
                    info,
                }),
                None => {
                    // right count, but not one record per requested address
                    return Err(WalletError::IncompleteResponse {
                        expected: addresses.len(),
                        actual: views.len(),
                    });
                }
            }
        }
        Ok(views)
    }

    /// Members in insertion order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Drop every member and the base designation.
    pub fn clear(&mut self) {
        self.accounts.clear();
        self.index.clear();
        self.base = None;
    }

    fn check_batch_size(&self, given: usize) -> WalletResult<()> {
        if given > MAX_ACCOUNTS_PER_BATCH {
            return Err(WalletError::TooManyAccounts {
                given,
                max: MAX_ACCOUNTS_PER_BATCH,
            });
        }
        Ok(())
    }

    /// Append if the address is new. Returns whether the account went in.
    fn insert(&mut self, account: Account) -> bool {
        let key = normalize(&account.address);
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.accounts.len());
        self.accounts.push(account);
        true
    }
}
