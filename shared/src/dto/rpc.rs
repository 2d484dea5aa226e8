//! # JSON-RPC Data Transfer Objects
//!
//! Envelopes for the EIP-1193 style JSON-RPC methods the dashboard calls on the
//! wallet provider (`eth_requestAccounts`, `eth_getBalance`, `eth_chainId`,
//! `eth_call`, `eth_sendTransaction`, `eth_getTransactionReceipt`).

use alloy_primitives::{Address, B256, U256, U64};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version sent with every request
pub const JSONRPC_VERSION: &str = "2.0";

/// EIP-1193: the user rejected the request
pub const USER_REJECTED_CODE: i64 = 4001;

/// EIP-1193: the requested account or method is not authorized
pub const UNAUTHORIZED_CODE: i64 = 4100;

/// EIP-1193: the provider is disconnected from all chains
pub const DISCONNECTED_CODE: i64 = 4900;

/// JSON-RPC request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: String,
    pub params: Value,
}

impl RpcRequest {
    pub fn new(id: u64, method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC response; exactly one of `result` / `error` is expected
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// JSON-RPC error object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcErrorObject {
    /// Whether the provider reported an explicit user rejection
    pub fn is_user_rejection(&self) -> bool {
        self.code == USER_REJECTED_CODE
    }
}

/// Parameters for `eth_sendTransaction` (plain value transfer)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    /// Amount in wei, serialized as a hex quantity
    pub value: U256,
}

/// Subset of `eth_getTransactionReceipt` the dashboard needs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: B256,
    #[serde(default)]
    pub block_number: Option<U64>,
    /// `0x1` success, `0x0` reverted; absent on pre-Byzantium chains
    #[serde(default)]
    pub status: Option<U64>,
}

impl TransactionReceipt {
    /// Receipts without a status field are treated as successful
    pub fn succeeded(&self) -> bool {
        self.status.map(|s| s == U64::from(1)).unwrap_or(true)
    }
}
