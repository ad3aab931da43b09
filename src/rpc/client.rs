use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::types::{RpcRequest, RpcResponse};
use super::RpcError;
use crate::config::SuiteConfig;

// Process-wide so concurrent in-flight requests carry distinct ids.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_request_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Thin JSON-RPC caller over a shared `reqwest::Client`.
///
/// Holds no other state; concurrent calls do not interfere.
pub struct RpcClient {
    client: Client,
    endpoint: String,
}

impl RpcClient {
    /// Build a client for the configured endpoint. The request timeout comes
    /// from the configuration rather than transport defaults.
    pub fn new(config: &SuiteConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, endpoint: config.endpoint.clone() })
    }

    /// Perform one JSON-RPC call and return the decoded body verbatim.
    ///
    /// A JSON-RPC `error` member is NOT a failure; it comes back inside the
    /// `Ok` response for the caller to inspect. The body is parsed whatever
    /// the HTTP status, since the target servers encode errors solely in the
    /// JSON body. The only `Err` path is a transport problem: connection
    /// failure, timeout, or a body that is not valid JSON.
    pub async fn call(&self, method: &str, params: Vec<Value>) -> Result<RpcResponse, RpcError> {
        let request = RpcRequest::new(method, params, next_request_id());
        debug!(method, id = request.id, "dispatching JSON-RPC request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|source| RpcError::Transport { method: method.to_string(), source })?;

        let body: RpcResponse = response
            .json()
            .await
            .map_err(|source| RpcError::Transport { method: method.to_string(), source })?;

        if let Some(error) = &body.error {
            warn!(method, code = error.code, "endpoint returned JSON-RPC error: {}", error.message);
        }
        debug!(method, id = request.id, "received JSON-RPC response");
        Ok(body)
    }

    /// Convenience for the common no-parameter methods (`eth_chainId`,
    /// `net_version`, ...).
    pub async fn call_no_params(&self, method: &str) -> Result<RpcResponse, RpcError> {
        self.call(method, Vec::new()).await
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
