//! Key material: encodings, account derivation, and signing.
//!
//! # Data Flow
//! ```text
//! private key / entropy / partial account
//!     → codec.rs (base58, varint, digest, address rule)
//!     → account.rs (derive + cross-validate into an Account)
//!     → signing.rs (digest → sign → self-verify → Signature)
//! ```
//!
//! # Security Constraints
//! - Private keys and entropy are never logged
//! - Every signature is self-verified before leaving the process
//! - Address derivation is bit-exact against the network constants

pub mod account;
pub mod codec;
pub mod signing;
pub mod types;

pub use account::{Account, PartialAccount};
pub use signing::{sign, verify, Signature};
pub use types::{KeyError, KeyResult};
