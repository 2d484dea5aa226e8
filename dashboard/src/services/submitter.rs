//! # Transaction Submitter
//!
//! Hands value transfers to the wallet with `eth_sendTransaction` (the wallet
//! signs and may prompt the user) and polls `eth_getTransactionReceipt` until
//! the transaction is mined or the confirmation timeout elapses.

use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::B256;
use async_trait::async_trait;
use serde_json::json;
use shared::dto::rpc::{TransactionReceipt, TransactionRequest};
use tracing::{debug, info, warn};

use crate::core::error::ProviderError;
use crate::core::service::TransactionSubmitter;
use crate::services::rpc::RpcClient;

/// Delay between receipt polls
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// [`TransactionSubmitter`] over the provider's JSON-RPC endpoint
pub struct JsonRpcSubmitter {
    rpc: Arc<RpcClient>,
    confirm_timeout: Duration,
    poll_interval: Duration,
}

impl JsonRpcSubmitter {
    pub fn new(rpc: Arc<RpcClient>, confirm_timeout: Duration) -> Self {
        Self {
            rpc,
            confirm_timeout,
            poll_interval: RECEIPT_POLL_INTERVAL,
        }
    }

    async fn poll_receipt(&self, hash: B256) -> Result<TransactionReceipt, ProviderError> {
        loop {
            match self
                .rpc
                .request::<Option<TransactionReceipt>>("eth_getTransactionReceipt", json!([hash]))
                .await
            {
                Ok(Some(receipt)) => return Ok(receipt),
                Ok(None) => debug!(hash = %hash, "Transaction still pending"),
                // Transient failures are retried until the timeout
                Err(ProviderError::Transport(e)) => {
                    warn!(hash = %hash, error = %e, "Receipt poll failed; retrying")
                }
                Err(e) => return Err(e),
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

#[async_trait]
impl TransactionSubmitter for JsonRpcSubmitter {
    async fn send_transaction(&self, request: TransactionRequest) -> Result<B256, ProviderError> {
        info!(
            from = %request.from,
            to = %request.to,
            value = %request.value,
            "Submitting transaction to wallet"
        );
        let hash: B256 = self.rpc.request("eth_sendTransaction", json!([request])).await?;
        info!(hash = %hash, "Transaction submitted");
        Ok(hash)
    }

    async fn wait(&self, hash: B256) -> Result<B256, ProviderError> {
        let receipt = tokio::time::timeout(self.confirm_timeout, self.poll_receipt(hash))
            .await
            .map_err(|_| {
                ProviderError::Transport(format!(
                    "Transaction {} not confirmed within {}s",
                    hash,
                    self.confirm_timeout.as_secs()
                ))
            })??;

        if receipt.succeeded() {
            info!(hash = %hash, block = ?receipt.block_number, "Transaction confirmed");
            Ok(receipt.transaction_hash)
        } else {
            warn!(hash = %hash, "Transaction reverted");
            Err(ProviderError::Rpc {
                code: -32000,
                message: "Transaction reverted".to_string(),
            })
        }
    }
}
