//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the wallet session, the dashboard state and
//! the background tasks started by user commands.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Command loop (main.rs)                    │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - handle_*() - user actions, validate then spawn    │   │
//! │  │  - handle_event() - applies task results             │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<DashboardState>>                  │   │
//! │  │  Session: SessionManager (owns wallet session)       │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - tasks::token::lookup_token()                             │
//! │  - tasks::send::send_eth()                                  │
//! │  - tasks::history::fetch_history()                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Management Pattern
//!
//! Locks are held briefly and never across an `.await`:
//!
//! ```rust,ignore
//! let owner = {
//!     let state = app.state.read();
//!     state.history.clone()
//! }; // Lock released here
//! ```
//!
//! Tasks never write `DashboardState`; they send an [`AppEvent`] and
//! [`App::handle_event`] applies it. Results for an account that is no longer
//! active are dropped there.

mod commands;
mod event_handler;
mod events;
mod state;
mod tasks;

pub use commands::{Command, HELP};
pub use events::AppEvent;
pub use state::*;
pub use tasks::send::SEND_REJECTED_MESSAGE;
pub use tasks::token::read_token_balance;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::dto::rpc::TransactionRequest;

use crate::core::config::AppConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{HistoryApi, TokenReader, TransactionSubmitter};
use crate::session::{SessionManager, SessionSnapshot};
use crate::utils::validation::{parse_address, parse_send_amount};

use event_handler::AppEventHandler;

/// External services the dashboard actions use
#[derive(Clone)]
pub struct Services {
    pub tokens: Arc<dyn TokenReader>,
    pub submitter: Arc<dyn TransactionSubmitter>,
    pub history: Arc<dyn HistoryApi>,
}

/// Main application orchestrator.
pub struct App {
    /// Thread-safe dashboard state. Hold locks for minimal duration.
    pub state: Arc<RwLock<DashboardState>>,

    /// Wallet session (single instance, shared with the provider event loop)
    pub session: SessionManager,

    /// Receiver for async task results, drained by the command loop
    pub event_rx: Receiver<AppEvent>,

    event_tx: Sender<AppEvent>,
    services: Services,
    history_limit: usize,
}

impl App {
    pub fn new(session: SessionManager, services: Services, config: &AppConfig) -> Self {
        let (event_tx, event_rx) = unbounded();
        Self {
            state: Arc::new(RwLock::new(DashboardState::default())),
            session,
            event_rx,
            event_tx,
            services,
            history_limit: config.history_limit,
        }
    }

    /// Apply one task result to the dashboard state
    pub fn handle_event(&self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    /// Apply every event already queued (non-blocking)
    pub fn on_tick(&self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    fn connected_owner(&self) -> Result<(SessionSnapshot, alloy_primitives::Address)> {
        let snapshot = self.session.snapshot();
        match snapshot.address {
            Some(owner) if snapshot.is_connected() => Ok((snapshot, owner)),
            _ => Err(AppError::State("Connect your wallet first".to_string())),
        }
    }

    /// Start a connect attempt in the background
    pub fn handle_connect(&self) {
        let session = self.session.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = session.connect().await;
            let _ = event_tx.send(AppEvent::ConnectResult(result)).await;
        });
    }

    pub fn handle_disconnect(&self) {
        self.session.disconnect();
        let mut state = self.state.write();
        state.clear_account_data();
        state.push_notice(NoticeLevel::Info, "Wallet disconnected");
    }

    /// Re-read the session balance in the background
    pub fn handle_refresh(&self) -> Result<()> {
        self.connected_owner()?;
        let session = self.session.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let snapshot = session.refresh_balance().await;
            let _ = event_tx.send(AppEvent::BalanceRefreshed(snapshot)).await;
        });
        Ok(())
    }

    /// Validate `contract` and start an ERC-20 lookup for the connected address
    pub fn handle_token_lookup(&self, contract: &str) -> Result<()> {
        let contract = parse_address(contract).map_err(AppError::Validation)?;
        let (_, owner) = self.connected_owner()?;

        self.state.write().token = TokenLookup::Loading { contract };
        tasks::token::lookup_token(
            self.services.tokens.clone(),
            contract,
            owner,
            self.event_tx.clone(),
        );
        Ok(())
    }

    /// Validate the form and start an ETH transfer from the connected address
    pub fn handle_send(&self, to: &str, amount: &str) -> Result<()> {
        let to = parse_address(to).map_err(AppError::Validation)?;
        let value = parse_send_amount(amount).map_err(AppError::Validation)?;
        let (_, from) = self.connected_owner()?;

        {
            let mut state = self.state.write();
            if state.send.is_in_flight() {
                return Err(AppError::State("A transaction is already in progress".to_string()));
            }
            state.send = SendStatus::Submitting;
        } // Lock released here

        tracing::info!(from = %from, to = %to, value = %value, "Send requested");
        tasks::send::send_eth(
            self.services.submitter.clone(),
            self.session.clone(),
            TransactionRequest { from, to, value },
            self.event_tx.clone(),
        );
        Ok(())
    }

    /// Return the send form to `Idle` unless a send is in flight
    pub fn reset_send(&self) -> bool {
        let mut state = self.state.write();
        if state.send.is_in_flight() {
            return false;
        }
        state.send = SendStatus::Idle;
        true
    }

    /// Fetch the latest `limit` (default from config) transactions
    pub fn handle_history(&self, limit: Option<usize>) -> Result<()> {
        let (snapshot, owner) = self.connected_owner()?;
        let chain_id = snapshot
            .chain_id
            .ok_or_else(|| AppError::State("Network unknown".to_string()))?;
        let limit = limit.unwrap_or(self.history_limit);
        if limit == 0 {
            return Err(AppError::Validation("Limit must be positive".to_string()));
        }

        self.state.write().history = HistoryState::Loading;
        tasks::history::fetch_history(
            self.services.history.clone(),
            chain_id,
            owner,
            limit,
            self.event_tx.clone(),
        );
        Ok(())
    }

    /// Disconnect and stop the provider event loop
    pub fn shutdown(&self) {
        self.session.shutdown();
        self.event_tx.close();
    }
}
