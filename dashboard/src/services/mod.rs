//! # Services Module
//!
//! Clients for everything the dashboard does not own.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── rpc.rs        - JSON-RPC over HTTP transport (shared by the next four)
//! ├── wallet.rs     - WalletProvider: accounts, balance, chain id
//! ├── watcher.rs    - Polls the provider and emits account/chain notifications
//! ├── token.rs      - TokenReader: ERC-20 eth_call reads
//! ├── submitter.rs  - TransactionSubmitter: eth_sendTransaction + receipt polling
//! └── explorer.rs   - HistoryApi: Etherscan-compatible txlist
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Dashboard                           │
//! │                                                             │
//! │  JsonRpcWallet   Erc20Reader   JsonRpcSubmitter   Etherscan │
//! │        │              │               │           Client    │
//! │        └──────────────┼───────────────┘              │      │
//! │                  RpcClient                           │      │
//! └───────────────────────┼──────────────────────────────┼──────┘
//!                         │ JSON-RPC                     │ HTTPS
//!                         ▼                              ▼
//!            ┌─────────────────────────┐    ┌──────────────────────┐
//!            │ Wallet provider         │    │ Block explorer API   │
//!            │ (keys, consent, signing)│    │ (etherscan / polygon)│
//!            └─────────────────────────┘    └──────────────────────┘
//! ```
//!
//! Every client implements a trait from [`crate::core::service`], so the
//! session manager and app only ever see `Arc<dyn Trait>`.

pub mod explorer;
pub mod rpc;
pub mod submitter;
pub mod token;
pub mod wallet;
pub mod watcher;

#[cfg(test)]
pub(crate) mod mock;

pub use explorer::EtherscanClient;
pub use rpc::RpcClient;
pub use submitter::JsonRpcSubmitter;
pub use token::Erc20Reader;
pub use wallet::JsonRpcWallet;
pub use watcher::ProviderWatcher;
