//! # ERC-20 Reader
//!
//! Read-only ERC-20 calls via `eth_call`. Calldata is built and decoded with
//! `alloy-sol-types`.

use std::sync::Arc;

use alloy_primitives::{hex, Address, Bytes, U256};
use alloy_sol_types::{sol, SolCall};
use async_trait::async_trait;
use serde_json::json;

use crate::core::error::ProviderError;
use crate::core::service::TokenReader;
use crate::services::rpc::RpcClient;

sol! {
    function balanceOf(address owner) external view returns (uint256);
    function symbol() external view returns (string);
    function decimals() external view returns (uint8);
    function name() external view returns (string);
}

/// [`TokenReader`] over the provider's JSON-RPC endpoint
pub struct Erc20Reader {
    rpc: Arc<RpcClient>,
}

impl Erc20Reader {
    pub fn new(rpc: Arc<RpcClient>) -> Self {
        Self { rpc }
    }

    async fn call<C: SolCall>(&self, token: Address, call: C) -> Result<C::Return, ProviderError> {
        let data = format!("0x{}", hex::encode(call.abi_encode()));
        let output: Bytes = self
            .rpc
            .request("eth_call", json!([{ "to": token, "data": data }, "latest"]))
            .await?;

        if output.is_empty() {
            return Err(ProviderError::Decode(format!(
                "{} returned no data; {} is not an ERC-20 contract",
                C::SIGNATURE,
                token
            )));
        }

        C::abi_decode_returns(&output)
            .map_err(|e| ProviderError::Decode(format!("{} decode failed: {}", C::SIGNATURE, e)))
    }
}

#[async_trait]
impl TokenReader for Erc20Reader {
    async fn balance_of(&self, token: Address, owner: Address) -> Result<U256, ProviderError> {
        self.call(token, balanceOfCall { owner }).await
    }

    async fn symbol(&self, token: Address) -> Result<String, ProviderError> {
        self.call(token, symbolCall {}).await
    }

    async fn decimals(&self, token: Address) -> Result<u8, ProviderError> {
        self.call(token, decimalsCall {}).await
    }

    async fn name(&self, token: Address) -> Result<String, ProviderError> {
        self.call(token, nameCall {}).await
    }
}
