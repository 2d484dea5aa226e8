//! # Application Events
//!
//! Results of background tasks, sent back to the command loop and applied by
//! [`App::handle_event`](crate::app::App::handle_event).

use alloy_primitives::Address;
use shared::dto::token::TokenBalance;
use shared::dto::transaction::TransactionRecord;

use crate::app::state::SendStatus;
use crate::core::error::SessionError;
use crate::session::SessionSnapshot;

/// Async task results sent to the command loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Connect attempt finished
    ConnectResult(Result<SessionSnapshot, SessionError>),
    /// Manual balance refresh finished
    BalanceRefreshed(SessionSnapshot),
    /// ERC-20 lookup finished for `owner`
    TokenResult {
        owner: Address,
        contract: Address,
        result: Result<TokenBalance, String>,
    },
    /// Send flow advanced
    SendStatusChanged(SendStatus),
    /// History fetch finished for `owner`
    HistoryResult {
        owner: Address,
        result: Result<Vec<TransactionRecord>, String>,
    },
}
