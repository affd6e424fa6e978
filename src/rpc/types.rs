//! Node RPC types, errors, and the provider seams the core depends on.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while talking to the node.
#[derive(Debug, Error)]
pub enum RpcError {
    /// Connection or protocol failure on the transport.
    #[error("transport error: {0}")]
    Http(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// The node answered with a JSON-RPC error object.
    #[error("node error {code}: {message}")]
    Node { code: i64, message: String },

    /// The node's response carried neither a result nor an error.
    #[error("response carried neither result nor error")]
    MissingResult,

    /// The result payload did not deserialize into the expected shape.
    #[error("malformed response payload: {0}")]
    Malformed(String),
}

/// Result type for node RPC operations.
pub type RpcResult<T> = Result<T, RpcError>;

/// One operation's inclusion state as reported by the node.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OperationRecord {
    /// The operation reached finality.
    pub is_final: bool,
    /// Blocks that currently contain the operation.
    pub in_blocks: Vec<String>,
    /// The operation sits in the submission pool.
    pub in_pool: bool,
}

/// Ledger state for one address.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AddressInfo {
    pub address: String,
    /// Balance in the candidate (not yet final) ledger, as a decimal string.
    pub candidate_balance: String,
    /// Balance in the final ledger, as a decimal string.
    pub final_balance: String,
    pub candidate_roll_count: u64,
    pub final_roll_count: u64,
}

/// Summary returned by the node's status query.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NodeStatus {
    pub node_id: String,
    pub version: String,
    #[serde(default)]
    pub current_cycle: u64,
}

/// Source of operation inclusion records, injected into the confirmation
/// tracker so tests can script lookups.
#[async_trait]
pub trait OperationRecordProvider: Send + Sync {
    async fn fetch_operation_records(&self, ids: &[String]) -> RpcResult<Vec<OperationRecord>>;
}

/// Source of address ledger records, injected into wallet enrichment.
#[async_trait]
pub trait AddressInfoProvider: Send + Sync {
    async fn fetch_address_info(&self, addresses: &[String]) -> RpcResult<Vec<AddressInfo>>;
}
