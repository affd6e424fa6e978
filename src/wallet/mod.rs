//! Wallet: account collection, signing, and node-side enrichment.
//!
//! # Data Flow
//! ```text
//! private keys / partial accounts
//!     → keys::account (derive + reconcile)
//!     → store.rs (ordered unique collection, base account)
//!     → sign / sign_with_base (keys::signing)
//!     → wallet_info (merge with node address records)
//! ```

pub mod store;
pub mod types;

pub use store::Wallet;
pub use types::{FullAccountView, WalletError, WalletResult, MAX_ACCOUNTS_PER_BATCH};
