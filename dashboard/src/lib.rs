//! # Wallet Dashboard - Library Root
//!
//! An Ethereum wallet dashboard driven from the command line. This library
//! crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Wallet Session**: connect, monitor, refresh and disconnect, reacting to
//!   account and network changes reported by the wallet
//! - **Balances**: ETH balance and network label for the connected account
//! - **ERC-20 Lookup**: name, symbol, decimals and balance of any token contract
//! - **Send ETH**: validated transfers signed by the wallet, tracked to confirmation
//! - **Transaction History**: recent transactions from Etherscan-compatible explorers
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              dashboard (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio           - Async runtime                       │
//! │  async-channel   - Event channels                      │
//! │  Reqwest         - HTTP client                         │
//! │  alloy           - Ethereum primitives, ABI encoding   │
//! │  tracing         - Structured file logging             │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ JSON-RPC                     │ HTTPS
//!          ▼                              ▼
//! ┌─────────────────────┐      ┌─────────────────────────┐
//! │  Wallet provider    │      │  Block explorer API     │
//! │  (keys and signing) │      │  (etherscan/polygonscan)│
//! └─────────────────────┘      └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (dashboard state, commands, events, tasks)
//!   │   ├── session (wallet session state machine)
//!   │   └── services (wallet, ERC-20, submitter, explorer)
//!   │
//!   └── ui (plain-text rendering)
//! ```
//!
//! - **core**: error types, service traits, configuration
//! - **debug**: file logging and panic hook
//! - **utils**: unit conversion and input validation
//!
//! ## Usage
//!
//! ```bash
//! DASHBOARD_RPC_URL=http://127.0.0.1:1248 cargo run --bin dashboard
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p dashboard
//! cargo test -p dashboard session::manager::tests
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod session;
pub mod ui;
pub mod utils;

pub use crate::app::{App, AppEvent, DashboardState, SendStatus};
pub use crate::core::{AppConfig, AppError, Result, SessionError};
pub use crate::session::{SessionManager, SessionSnapshot, SessionStatus};
