//! JSON-RPC client with timeout and bounded transport retries.
//!
//! # Responsibilities
//! - Send JSON-RPC 2.0 requests to the node endpoint
//! - Enforce a per-request timeout
//! - Retry connection-level failures a bounded number of times
//! - Expose the typed node queries the rest of the crate needs

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::{sleep, timeout};

use crate::config::RpcConfig;
use crate::rpc::types::{
    AddressInfo, AddressInfoProvider, NodeStatus, OperationRecord, OperationRecordProvider,
    RpcError, RpcResult,
};

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    result: Option<serde_json::Value>,
    error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    message: String,
}

/// Client for the node's JSON-RPC API.
#[derive(Debug, Clone)]
pub struct NodeClient {
    http: reqwest::Client,
    endpoint: url::Url,
    config: RpcConfig,
}

impl NodeClient {
    /// Create a client for the configured endpoint.
    pub fn new(config: RpcConfig) -> RpcResult<Self> {
        let endpoint: url::Url = config
            .endpoint
            .parse()
            .map_err(|e| RpcError::Http(format!("invalid endpoint '{}': {}", config.endpoint, e)))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RpcError::Http(e.to_string()))?;

        tracing::info!(endpoint = %endpoint, timeout_secs = config.timeout_secs, "Node client initialized");

        Ok(Self {
            http,
            endpoint,
            config,
        })
    }

    /// Send one JSON-RPC request, retrying connection failures up to the
    /// configured count. Node-reported errors are surfaced immediately.
    pub async fn send_request(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> RpcResult<serde_json::Value> {
        let mut last_error = RpcError::Http("no attempt made".to_string());

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                sleep(Duration::from_millis(self.config.retry_delay_ms)).await;
            }

            match self.request_once(method, params.clone()).await {
                Ok(result) => return Ok(result),
                Err(err @ RpcError::Node { .. }) => return Err(err),
                Err(err) => {
                    tracing::warn!(method, attempt, error = %err, "RPC request failed, retrying");
                    last_error = err;
                }
            }
        }

        Err(last_error)
    }

    async fn request_once(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> RpcResult<serde_json::Value> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        let send = self.http.post(self.endpoint.clone()).json(&request).send();
        let response = match timeout(Duration::from_secs(self.config.timeout_secs), send).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(RpcError::Http(e.to_string())),
            Err(_) => return Err(RpcError::Timeout(self.config.timeout_secs)),
        };

        let parsed: JsonRpcResponse = response
            .json()
            .await
            .map_err(|e| RpcError::Http(e.to_string()))?;

        if let Some(error) = parsed.error {
            return Err(RpcError::Node {
                code: error.code,
                message: error.message,
            });
        }
        parsed.result.ok_or(RpcError::MissingResult)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> RpcResult<T> {
        let result = self.send_request(method, params).await?;
        serde_json::from_value(result).map_err(|e| RpcError::Malformed(e.to_string()))
    }

    /// Look up inclusion records for a batch of operation ids.
    pub async fn get_operations(&self, ids: &[String]) -> RpcResult<Vec<OperationRecord>> {
        self.call("get_operations", serde_json::json!([ids])).await
    }

    /// Look up ledger records for a batch of addresses.
    pub async fn get_addresses(&self, addresses: &[String]) -> RpcResult<Vec<AddressInfo>> {
        self.call("get_addresses", serde_json::json!([addresses]))
            .await
    }

    /// Query the node's status summary.
    pub async fn get_status(&self) -> RpcResult<NodeStatus> {
        self.call("get_status", serde_json::json!([])).await
    }

    /// Submit pre-serialized signed operations; returns the assigned
    /// operation ids, ready to hand to the confirmation tracker.
    pub async fn send_operations(
        &self,
        operations: &[serde_json::Value],
    ) -> RpcResult<Vec<String>> {
        let ids: Vec<String> = self
            .call("send_operations", serde_json::json!([operations]))
            .await?;
        tracing::info!(count = ids.len(), "Operations submitted");
        Ok(ids)
    }
}

#[async_trait]
impl OperationRecordProvider for NodeClient {
    async fn fetch_operation_records(&self, ids: &[String]) -> RpcResult<Vec<OperationRecord>> {
        self.get_operations(ids).await
    }
}

#[async_trait]
impl AddressInfoProvider for NodeClient {
    async fn fetch_address_info(&self, addresses: &[String]) -> RpcResult<Vec<AddressInfo>> {
        self.get_addresses(addresses).await
    }
}
