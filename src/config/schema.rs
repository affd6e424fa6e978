//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so a minimal config works out of the box.

use serde::{Deserialize, Serialize};

/// Root configuration for the node client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// JSON-RPC transport settings.
    pub rpc: RpcConfig,

    /// Operation-confirmation polling settings.
    pub confirmation: ConfirmationConfig,
}

/// JSON-RPC transport configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Node endpoint URL.
    pub endpoint: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Transport-level retries per request (connection failures only;
    /// node-reported errors are never retried here).
    pub max_retries: u32,

    /// Delay between transport retries, in milliseconds.
    pub retry_delay_ms: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:33035".to_string(),
            timeout_secs: 10,
            max_retries: 3,
            retry_delay_ms: 500,
        }
    }
}

/// Confirmation-polling configuration.
///
/// The defaults are behavioral constants: changing them changes how long a
/// confirmation call is willing to wait and how tolerant it is of a degraded
/// node.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfirmationConfig {
    /// Fixed interval between polls, in seconds. Applied after every
    /// iteration, successful or not.
    pub poll_interval_secs: u64,

    /// Consecutive lookup failures tolerated before aborting.
    pub max_lookup_failures: u32,

    /// Total poll iterations tolerated before declaring a timeout.
    pub max_poll_iterations: u32,
}

impl Default for ConfirmationConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 10,
            max_lookup_failures: 100,
            max_poll_iterations: 1000,
        }
    }
}
