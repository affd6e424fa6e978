//! Wallet error definitions and enriched account views.

use thiserror::Error;

use crate::keys::{Account, KeyError};
use crate::rpc::{AddressInfo, RpcError};

/// Maximum accounts accepted by one add call.
pub const MAX_ACCOUNTS_PER_BATCH: usize = 256;

/// Errors that can occur during wallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
    /// A batch add exceeded the per-call cap. Nothing was added.
    #[error("batch of {given} accounts exceeds the cap of {max}")]
    TooManyAccounts { given: usize, max: usize },

    /// A signature was requested for an address not in the wallet.
    #[error("no account with address {0} in this wallet")]
    UnknownSigner(String),

    /// A signature was requested via the base account, but none is set.
    #[error("wallet has no base account")]
    NoBaseAccount,

    /// The node's batch response did not contain exactly one record per
    /// requested address.
    #[error("node returned {actual} address records, expected {expected}")]
    IncompleteResponse { expected: usize, actual: usize },

    /// Key material failed to decode, derive, or reconcile.
    #[error(transparent)]
    Key(#[from] KeyError),

    /// The node lookup backing `wallet_info` failed.
    #[error(transparent)]
    Rpc(#[from] RpcError),
}

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

/// A wallet member merged with its node-side ledger record.
#[derive(Debug, Clone)]
pub struct FullAccountView {
    /// Local key material (address, public key, secrets if held).
    pub account: Account,
    /// Balance and roll state fetched from the node.
    pub info: AddressInfo,
}
