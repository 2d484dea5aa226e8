//! # Token Data Transfer Objects
//!
//! Result of an ERC-20 balance lookup.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// ERC-20 metadata and balance for one holder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenBalance {
    pub contract: Address,
    pub owner: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Raw balance in the token's smallest unit
    pub balance_minor: U256,
    /// Balance scaled by `decimals` for display
    pub balance_display: String,
}
