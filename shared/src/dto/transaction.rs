//! # Transaction History Records
//!
//! Typed transaction rows built from [`ExplorerTransaction`].

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::explorer::ExplorerTransaction;

/// Direction of a transfer relative to the viewing address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferDirection {
    Incoming,
    Outgoing,
    #[serde(rename = "self")]
    SelfTransfer,
    /// Neither side is the viewing address (e.g. internal listing quirks)
    Unrelated,
}

/// A past transaction for display in the history list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionRecord {
    pub hash: String,
    pub block_number: u64,
    pub from: String,
    /// `None` for contract creations
    pub to: Option<String>,
    pub value_wei: U256,
    /// Unix seconds
    pub timestamp: i64,
    pub success: bool,
    /// The transaction carried calldata (contract interaction)
    pub has_input: bool,
}

impl TransactionRecord {
    pub fn direction(&self, owner: &str) -> TransferDirection {
        let from_me = self.from.eq_ignore_ascii_case(owner);
        let to_me = self
            .to
            .as_deref()
            .map(|to| to.eq_ignore_ascii_case(owner))
            .unwrap_or(false);
        match (from_me, to_me) {
            (true, true) => TransferDirection::SelfTransfer,
            (true, false) => TransferDirection::Outgoing,
            (false, true) => TransferDirection::Incoming,
            (false, false) => TransferDirection::Unrelated,
        }
    }
}

impl TryFrom<ExplorerTransaction> for TransactionRecord {
    type Error = String;

    fn try_from(raw: ExplorerTransaction) -> Result<Self, Self::Error> {
        let value_wei = U256::from_str(raw.value.trim())
            .map_err(|e| format!("Invalid value '{}' for {}: {}", raw.value, raw.hash, e))?;
        let timestamp = raw
            .time_stamp
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid timestamp '{}' for {}: {}", raw.time_stamp, raw.hash, e))?;
        let block_number = raw.block_number.trim().parse::<u64>().unwrap_or_default();

        // isError=1 means execution failed; txreceipt_status=0 means the receipt
        // reported failure. Either one marks the row as failed.
        let success = raw.is_error != "1" && raw.receipt_status != "0";
        let has_input = !raw.input.is_empty() && raw.input != "0x";
        let to = if raw.to.is_empty() { None } else { Some(raw.to) };

        Ok(Self {
            hash: raw.hash,
            block_number,
            from: raw.from,
            to,
            value_wei,
            timestamp,
            success,
            has_input,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ME: &str = "0x1111111111111111111111111111111111111111";
    const OTHER: &str = "0x2222222222222222222222222222222222222222";

    fn raw(from: &str, to: &str) -> ExplorerTransaction {
        ExplorerTransaction {
            block_number: "100".to_string(),
            time_stamp: "1700000000".to_string(),
            hash: "0xfeed".to_string(),
            from: from.to_string(),
            to: to.to_string(),
            value: "2500000000000000000".to_string(),
            is_error: "0".to_string(),
            receipt_status: "1".to_string(),
            input: "0x".to_string(),
        }
    }

    #[test]
    fn test_conversion() {
        let record = TransactionRecord::try_from(raw(ME, OTHER)).unwrap();
        assert_eq!(record.value_wei, U256::from(2_500_000_000_000_000_000u128));
        assert_eq!(record.timestamp, 1_700_000_000);
        assert_eq!(record.block_number, 100);
        assert!(record.success);
        assert!(!record.has_input);
    }

    #[test]
    fn test_failed_and_contract_call() {
        let mut row = raw(ME, OTHER);
        row.is_error = "1".to_string();
        row.input = "0xa9059cbb".to_string();
        let record = TransactionRecord::try_from(row).unwrap();
        assert!(!record.success);
        assert!(record.has_input);
    }

    #[test]
    fn test_contract_creation_has_no_recipient() {
        let record = TransactionRecord::try_from(raw(ME, "")).unwrap();
        assert_eq!(record.to, None);
    }

    #[test]
    fn test_invalid_value_rejected() {
        let mut row = raw(ME, OTHER);
        row.value = "lots".to_string();
        assert!(TransactionRecord::try_from(row).is_err());
    }

    #[test]
    fn test_direction() {
        let upper_me = ME.to_uppercase().replace("0X", "0x");
        let out = TransactionRecord::try_from(raw(ME, OTHER)).unwrap();
        assert_eq!(out.direction(&upper_me), TransferDirection::Outgoing);
        let inc = TransactionRecord::try_from(raw(OTHER, ME)).unwrap();
        assert_eq!(inc.direction(ME), TransferDirection::Incoming);
        let own = TransactionRecord::try_from(raw(ME, ME)).unwrap();
        assert_eq!(own.direction(ME), TransferDirection::SelfTransfer);
        assert_eq!(out.direction("0x3333333333333333333333333333333333333333"), TransferDirection::Unrelated);
    }
}
