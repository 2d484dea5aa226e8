//! # JSON-RPC Client
//!
//! Thin HTTP transport for the wallet provider's JSON-RPC endpoint. Every
//! service in this module goes through [`RpcClient::request`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::dto::rpc::{RpcRequest, RpcResponse};
use tracing::{debug, warn};

use crate::core::error::ProviderError;

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// JSON-RPC over HTTP POST
pub struct RpcClient {
    client: Client,
    url: String,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Create a client for `url` with a 10 second request timeout.
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Call `method` and decode its `result` into `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, ProviderError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);
        debug!(id, method, "JSON-RPC request");

        let response = self.client.post(&self.url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(id, method, status = %status, "JSON-RPC endpoint returned HTTP error");
            return Err(ProviderError::Transport(format!("HTTP {}", status)));
        }

        let body: RpcResponse = response.json().await?;
        decode_response(method, body)
    }
}

/// Turn a JSON-RPC envelope into the typed result or a [`ProviderError`].
pub(crate) fn decode_response<T: DeserializeOwned>(
    method: &str,
    response: RpcResponse,
) -> Result<T, ProviderError> {
    if let Some(error) = response.error {
        debug!(method, code = error.code, message = %error.message, "JSON-RPC error");
        return Err(error.into());
    }

    // `null` results (e.g. a pending receipt) decode into Option<T>
    let result = response.result.unwrap_or(Value::Null);
    serde_json::from_value(result)
        .map_err(|e| ProviderError::Decode(format!("{}: {}", method, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;
    use serde_json::json;

    fn envelope(value: Value) -> RpcResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_decode_result() {
        let response = envelope(json!({"jsonrpc": "2.0", "id": 1, "result": "0x1bc16d674ec80000"}));
        let balance: U256 = decode_response("eth_getBalance", response).unwrap();
        assert_eq!(balance, U256::from(2_000_000_000_000_000_000u128));
    }

    #[test]
    fn test_decode_error_object() {
        let response = envelope(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": 4001, "message": "User rejected the request."}
        }));
        let err = decode_response::<Vec<String>>("eth_requestAccounts", response).unwrap_err();
        assert!(err.is_user_rejection());
    }

    #[test]
    fn test_decode_null_result() {
        let response = envelope(json!({"jsonrpc": "2.0", "id": 1, "result": null}));
        let receipt: Option<String> = decode_response("eth_getTransactionReceipt", response).unwrap();
        assert!(receipt.is_none());
    }

    #[test]
    fn test_decode_mismatch() {
        let response = envelope(json!({"jsonrpc": "2.0", "id": 1, "result": {"unexpected": true}}));
        let err = decode_response::<U256>("eth_getBalance", response).unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));
    }
}
