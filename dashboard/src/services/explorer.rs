//! # Block Explorer Client
//!
//! Transaction history from Etherscan-compatible APIs
//! (`module=account&action=txlist`).
//!
//! | Chain            | Endpoint                                |
//! |------------------|-----------------------------------------|
//! | Ethereum Mainnet | `https://api.etherscan.io/api`          |
//! | Sepolia Testnet  | `https://api-sepolia.etherscan.io/api`  |
//! | Polygon          | `https://api.polygonscan.com/api`       |
//! | Mumbai Testnet   | `https://api-testnet.polygonscan.com/api` |

use std::time::Duration;

use alloy_primitives::Address;
use async_trait::async_trait;
use reqwest::Client;
use shared::dto::explorer::{ExplorerResponse, ExplorerTransaction};
use shared::dto::transaction::TransactionRecord;
use tracing::{debug, warn};

use crate::core::error::{AppError, Result};
use crate::core::service::HistoryApi;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Explorer API base URL for a chain, if one is known
pub fn explorer_api_url(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        1 => Some("https://api.etherscan.io/api"),
        11155111 => Some("https://api-sepolia.etherscan.io/api"),
        137 => Some("https://api.polygonscan.com/api"),
        80001 => Some("https://api-testnet.polygonscan.com/api"),
        _ => None,
    }
}

/// [`HistoryApi`] backed by Etherscan-style explorers
pub struct EtherscanClient {
    client: Client,
    api_key: Option<String>,
}

impl EtherscanClient {
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }
}

#[async_trait]
impl HistoryApi for EtherscanClient {
    async fn list_transactions(
        &self,
        chain_id: u64,
        address: Address,
        limit: usize,
    ) -> Result<Vec<TransactionRecord>> {
        let url = explorer_api_url(chain_id).ok_or_else(|| {
            AppError::Validation(format!(
                "Transaction history is not available on chain {}",
                chain_id
            ))
        })?;

        let address = address.to_checksum(None);
        let offset = limit.to_string();
        let mut query = vec![
            ("module", "account"),
            ("action", "txlist"),
            ("address", address.as_str()),
            ("startblock", "0"),
            ("endblock", "99999999"),
            ("page", "1"),
            ("offset", offset.as_str()),
            ("sort", "desc"),
        ];
        if let Some(key) = self.api_key.as_deref() {
            query.push(("apikey", key));
        }

        debug!(chain_id, address = %address, limit, "Fetching transaction history");

        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(|e| AppError::Api(format!("Network error: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Api(format!(
                "Explorer returned HTTP {}",
                response.status()
            )));
        }

        let body: ExplorerResponse = response
            .json()
            .await
            .map_err(|e| AppError::Api(format!("Failed to parse response: {}", e)))?;

        parse_history(body, limit)
    }
}

/// Convert an explorer envelope into records, newest first, at most `limit`.
pub(crate) fn parse_history(body: ExplorerResponse, limit: usize) -> Result<Vec<TransactionRecord>> {
    if body.is_empty_history() {
        return Ok(Vec::new());
    }
    if !body.is_ok() {
        return Err(AppError::Api(body.error_message()));
    }

    let rows: Vec<ExplorerTransaction> = serde_json::from_value(body.result)
        .map_err(|e| AppError::Api(format!("Failed to parse transactions: {}", e)))?;

    let mut records: Vec<TransactionRecord> = rows
        .into_iter()
        .filter_map(|row| match TransactionRecord::try_from(row) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, "Skipping malformed explorer row");
                None
            }
        })
        .collect();

    records.sort_by(|a, b| {
        b.block_number
            .cmp(&a.block_number)
            .then(b.timestamp.cmp(&a.timestamp))
    });
    records.truncate(limit);
    Ok(records)
}
