//! # Wallet Provider Client
//!
//! [`WalletProvider`] over an EIP-1193 style JSON-RPC endpoint (a browser
//! wallet bridge, Frame, or a local dev node with unlocked accounts).
//!
//! Consent prompts and signing happen on the provider side; this client only
//! forwards requests.

use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::{Address, U256};
use async_channel::Sender;
use async_trait::async_trait;
use serde_json::json;
use shared::dto::network::parse_chain_id_hex;
use tracing::debug;

use crate::core::error::ProviderError;
use crate::core::service::{ProviderEvent, ProviderEventKind, SubscriptionId, WalletProvider};
use crate::services::rpc::RpcClient;
use crate::services::watcher::ProviderWatcher;

/// JSON-RPC wallet provider with a polling change watcher
pub struct JsonRpcWallet {
    rpc: Arc<RpcClient>,
    watcher: ProviderWatcher,
}

impl JsonRpcWallet {
    pub fn new(rpc: Arc<RpcClient>, poll_interval: Duration) -> Self {
        let watcher = ProviderWatcher::new(rpc.clone(), poll_interval);
        Self { rpc, watcher }
    }
}

#[async_trait]
impl WalletProvider for JsonRpcWallet {
    async fn probe(&self) -> bool {
        match self.rpc.request::<String>("eth_chainId", json!([])).await {
            Ok(_) => true,
            Err(e) => {
                debug!(url = self.rpc.url(), error = %e, "Wallet provider probe failed");
                false
            }
        }
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        self.rpc.request("eth_requestAccounts", json!([])).await
    }

    async fn get_balance(&self, address: Address) -> Result<U256, ProviderError> {
        self.rpc.request("eth_getBalance", json!([address, "latest"])).await
    }

    async fn get_chain_id(&self) -> Result<u64, ProviderError> {
        let hex: String = self.rpc.request("eth_chainId", json!([])).await?;
        parse_chain_id_hex(&hex)
            .ok_or_else(|| ProviderError::Decode(format!("invalid chain id '{}'", hex)))
    }

    fn subscribe(&self, kind: ProviderEventKind, sender: Sender<ProviderEvent>) -> SubscriptionId {
        self.watcher.subscribe(kind, sender)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.watcher.unsubscribe(id)
    }
}
