//! # Core Abstractions
//!
//! Core traits, error types and configuration shared by every part of the dashboard.
//!
//! ## Modules
//!
//! - **[`error`]**: Error taxonomy (`ProviderError`, `SessionError`, `AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`WalletProvider`,
//!   `TokenReader`, `TransactionSubmitter`, `HistoryApi`)
//! - **[`config`]**: Environment-driven application configuration
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dashboard::core::service::WalletProvider;
//! use dashboard::services::{rpc::RpcClient, wallet::JsonRpcWallet};
//!
//! let rpc = Arc::new(RpcClient::new("http://127.0.0.1:8545"));
//! let provider: Arc<dyn WalletProvider> =
//!     Arc::new(JsonRpcWallet::new(rpc, std::time::Duration::from_secs(2)));
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::AppConfig;
pub use error::{AppError, ProviderError, Result, SessionError};
pub use service::{
    HistoryApi, ProviderEvent, ProviderEventKind, SubscriptionId, TokenReader,
    TransactionSubmitter, WalletProvider,
};
