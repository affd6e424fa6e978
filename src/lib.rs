//! Client library for a proof-of-stake blockchain node spoken to over
//! JSON-RPC: local key management, operation signing, submission, and
//! confirmation tracking.
//!
//! ```no_run
//! use pos_client::config::ClientConfig;
//! use pos_client::confirmation::{ConfirmationTracker, OperationStatus};
//! use pos_client::rpc::NodeClient;
//! use pos_client::wallet::Wallet;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::default();
//! let client = NodeClient::new(config.rpc)?;
//!
//! let mut wallet = Wallet::new();
//! let added = wallet.add_from_private_keys(&["S1...".to_string()])?;
//! let signature = wallet.sign(b"operation bytes", &added[0].address)?;
//!
//! // hand the signed payload to send_operations, then track the id
//! let tracker = ConfirmationTracker::new(client, config.confirmation);
//! let status = tracker.await_status("O1...", OperationStatus::Final).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod confirmation;
pub mod keys;
pub mod rpc;
pub mod wallet;

pub use config::ClientConfig;
pub use confirmation::{classify, ConfirmationTracker, OperationStatus};
pub use keys::{Account, PartialAccount, Signature};
pub use rpc::NodeClient;
pub use wallet::Wallet;
