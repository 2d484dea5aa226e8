//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contracts the dashboard speaks with its external
//! collaborators (the wallet's JSON-RPC endpoint and the block-explorer HTTP API),
//! plus the domain records built from them.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::rpc`]**: JSON-RPC 2.0 envelopes and provider error codes
//!   - **[`dto::explorer`]**: Etherscan-compatible `txlist` responses
//!   - **[`dto::network`]**: Chain id → network label table
//!   - **[`dto::token`]**: ERC-20 balance lookups
//!   - **[`dto::transaction`]**: Transaction history records
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! The explorer API returns every numeric field as a decimal string and uses
//! camelCase names (`timeStamp`, `isError`), so the raw DTOs mirror that exactly
//! and conversion into typed records happens in [`dto::transaction`].
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::network::network_label;
//! use shared::utils::truncate_address;
//!
//! assert_eq!(network_label(11155111), "Sepolia Testnet");
//! assert_eq!(
//!     truncate_address("0x742d35Cc6634C0532925a3b844Bc454e4438f44e"),
//!     "0x742d...f44e"
//! );
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
