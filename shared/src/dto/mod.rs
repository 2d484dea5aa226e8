//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the wallet provider and the block explorer.
//!
//! ## Module Organization
//!
//! - [`rpc`] - JSON-RPC 2.0 request/response envelopes
//! - [`explorer`] - Raw block-explorer responses
//! - [`network`] - Known networks and their display labels
//! - [`token`] - ERC-20 token balance results
//! - [`transaction`] - Typed transaction history records
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST <rpc url>
//! Content-Type: application/json
//!
//! { "jsonrpc": "2.0", "id": 1, "method": "eth_chainId", "params": [] }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//!
//! { "jsonrpc": "2.0", "id": 1, "result": "0xaa36a7" }
//! ```

pub mod explorer;
pub mod network;
pub mod rpc;
pub mod token;
pub mod transaction;

pub use explorer::*;
pub use network::*;
pub use rpc::*;
pub use token::*;
pub use transaction::*;
