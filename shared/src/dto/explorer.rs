//! # Block Explorer Data Transfer Objects
//!
//! Raw shapes returned by Etherscan-compatible `module=account&action=txlist`
//! endpoints. Every numeric field arrives as a decimal string.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message the explorer returns alongside `status: "0"` for an empty history
pub const NO_TRANSACTIONS_MESSAGE: &str = "No transactions found";

/// Top-level explorer envelope
///
/// `result` is an array of transactions on success and a plain string
/// (rate limit notice, invalid key, ...) on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerResponse {
    pub status: String,
    pub message: String,
    pub result: Value,
}

impl ExplorerResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "1"
    }

    /// `status: "0"` is also used for "nothing to show"
    pub fn is_empty_history(&self) -> bool {
        !self.is_ok() && self.message.eq_ignore_ascii_case(NO_TRANSACTIONS_MESSAGE)
    }

    /// Best human-readable explanation of a failed response
    pub fn error_message(&self) -> String {
        match self.result.as_str() {
            Some(detail) if !detail.is_empty() => format!("{}: {}", self.message, detail),
            _ => self.message.clone(),
        }
    }
}

/// One transaction row as the explorer reports it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerTransaction {
    pub block_number: String,
    pub time_stamp: String,
    pub hash: String,
    pub from: String,
    /// Empty for contract creations
    #[serde(default)]
    pub to: String,
    pub value: String,
    #[serde(default)]
    pub is_error: String,
    #[serde(default, rename = "txreceipt_status")]
    pub receipt_status: String,
    #[serde(default)]
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_txlist_row() {
        let row: ExplorerTransaction = serde_json::from_value(json!({
            "blockNumber": "4820000",
            "timeStamp": "1700000000",
            "hash": "0xabc",
            "from": "0x1111111111111111111111111111111111111111",
            "to": "0x2222222222222222222222222222222222222222",
            "value": "1000000000000000000",
            "isError": "0",
            "txreceipt_status": "1",
            "input": "0x",
            "gas": "21000"
        }))
        .unwrap();
        assert_eq!(row.time_stamp, "1700000000");
        assert_eq!(row.receipt_status, "1");
    }

    #[test]
    fn test_empty_history_envelope() {
        let resp: ExplorerResponse = serde_json::from_value(json!({
            "status": "0",
            "message": "No transactions found",
            "result": []
        }))
        .unwrap();
        assert!(resp.is_empty_history());
    }

    #[test]
    fn test_error_envelope() {
        let resp: ExplorerResponse = serde_json::from_value(json!({
            "status": "0",
            "message": "NOTOK",
            "result": "Invalid API Key"
        }))
        .unwrap();
        assert!(!resp.is_ok());
        assert!(!resp.is_empty_history());
        assert_eq!(resp.error_message(), "NOTOK: Invalid API Key");
    }
}
