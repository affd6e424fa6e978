//! JSON-RPC node access.
//!
//! # Data Flow
//! ```text
//! RpcConfig (endpoint, timeout, retry budget)
//!     → client.rs (JSON-RPC 2.0 over reqwest)
//!     → types.rs (typed records + provider traits)
//! ```
//!
//! # Design Decisions
//! - Each call is an independent request; no retained connections beyond the
//!   reqwest pool, no caching
//! - Connection failures retry a bounded number of times; node-reported
//!   errors never do
//! - The wallet and the confirmation tracker consume the node through the
//!   provider traits in `types.rs`, so tests substitute scripted fakes

pub mod client;
pub mod types;

pub use client::NodeClient;
pub use types::{
    AddressInfo, AddressInfoProvider, NodeStatus, OperationRecord, OperationRecordProvider,
    RpcError, RpcResult,
};
