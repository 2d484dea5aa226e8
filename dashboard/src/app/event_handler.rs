//! # Event Handler
//!
//! Applies `AppEvent` results from background tasks to the dashboard state.
//!
//! Token and history results carry the address they were fetched for. They
//! are dropped when that address is no longer the connected account.

use alloy_primitives::Address;
use shared::dto::token::TokenBalance;
use shared::dto::transaction::TransactionRecord;

use crate::app::state::{HistoryState, NoticeLevel, SendStatus, TokenLookup};
use crate::app::{App, AppEvent};
use crate::core::error::SessionError;
use crate::session::SessionSnapshot;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Acquires the write lock per event for minimal duration
    fn handle_event_impl(&self, event: AppEvent) {
        match event {
            AppEvent::ConnectResult(result) => self.handle_connect_result(result),
            AppEvent::BalanceRefreshed(snapshot) => self.handle_balance_refreshed(snapshot),
            AppEvent::TokenResult {
                owner,
                contract,
                result,
            } => self.handle_token_result(owner, contract, result),
            AppEvent::SendStatusChanged(status) => self.handle_send_status(status),
            AppEvent::HistoryResult { owner, result } => self.handle_history_result(owner, result),
        }
    }
}

impl App {
    fn is_current_owner(&self, owner: Address) -> bool {
        let snapshot = self.session.snapshot();
        snapshot.is_connected() && snapshot.address == Some(owner)
    }

    fn handle_connect_result(&self, result: Result<SessionSnapshot, SessionError>) {
        tracing::info!(event = "ConnectResult", success = result.is_ok(), "Processing connect result");

        let mut state = self.state.write();
        match result {
            Ok(snapshot) if snapshot.is_connected() => {
                let message = format!(
                    "Connected {} on {}",
                    snapshot.short_address().unwrap_or_default(),
                    snapshot.network_label.as_deref().unwrap_or("unknown network")
                );
                state.push_notice(NoticeLevel::Success, message);
            }
            // Resolved after a disconnect
            Ok(_) => {}
            Err(SessionError::UserRejected) => {
                state.push_notice(NoticeLevel::Info, SessionError::UserRejected.to_string());
            }
            Err(e) => state.push_notice(NoticeLevel::Error, e.to_string()),
        }
    }

    fn handle_balance_refreshed(&self, snapshot: SessionSnapshot) {
        if let Some(balance) = snapshot.balance_display() {
            tracing::debug!(balance = %balance, "Balance refreshed");
        }
    }

    fn handle_token_result(
        &self,
        owner: Address,
        contract: Address,
        result: Result<TokenBalance, String>,
    ) {
        if !self.is_current_owner(owner) {
            tracing::debug!(owner = %owner, contract = %contract, "Dropping token result for inactive account");
            return;
        }

        let mut state = self.state.write();
        // A newer lookup for another contract supersedes this one
        if !matches!(state.token, TokenLookup::Loading { contract: c } if c == contract) {
            return;
        }
        let lookup = match result {
            Ok(balance) => TokenLookup::Loaded(balance),
            Err(message) => {
                state.push_notice(NoticeLevel::Error, format!("Token lookup failed: {}", message));
                TokenLookup::Failed { contract, message }
            }
        };
        state.token = lookup;
    }

    fn handle_send_status(&self, status: SendStatus) {
        tracing::info!(status = ?status, "Send status changed");

        let mut state = self.state.write();
        match &status {
            SendStatus::Confirmed { hash } => {
                state.push_notice(NoticeLevel::Success, format!("Transaction confirmed: {}", hash));
            }
            SendStatus::Failed { message } => {
                state.push_notice(NoticeLevel::Error, format!("Send failed: {}", message));
            }
            SendStatus::Pending { hash } => {
                state.push_notice(NoticeLevel::Info, format!("Transaction submitted: {}", hash));
            }
            SendStatus::Idle | SendStatus::Submitting => {}
        }
        state.send = status;
    }

    fn handle_history_result(&self, owner: Address, result: Result<Vec<TransactionRecord>, String>) {
        if !self.is_current_owner(owner) {
            tracing::debug!(owner = %owner, "Dropping history for inactive account");
            return;
        }

        let mut state = self.state.write();
        if state.history != HistoryState::Loading {
            return;
        }
        let history = match result {
            Ok(records) => HistoryState::Loaded { owner, records },
            Err(message) => {
                state.push_notice(NoticeLevel::Error, format!("History unavailable: {}", message));
                HistoryState::Failed(message)
            }
        };
        state.history = history;
    }
}
