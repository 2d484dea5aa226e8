//! # Dashboard State Types
//!
//! Everything the dashboard shows besides the wallet session itself: the
//! token lookup, the send form status, the history list and a short log of
//! notices.

use alloy_primitives::{Address, B256};
use chrono::{DateTime, Utc};
use shared::dto::token::TokenBalance;
use shared::dto::transaction::TransactionRecord;

/// Notices kept for display
pub const MAX_NOTICES: usize = 20;

/// Send-ETH lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SendStatus {
    #[default]
    Idle,
    /// Waiting for the wallet to accept (and possibly prompt for) the transaction
    Submitting,
    /// Broadcast, waiting for the receipt
    Pending { hash: B256 },
    Confirmed { hash: B256 },
    Failed { message: String },
}

impl SendStatus {
    /// A send is between submission and its final outcome
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SendStatus::Submitting | SendStatus::Pending { .. })
    }
}

/// ERC-20 balance lookup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TokenLookup {
    #[default]
    Idle,
    Loading { contract: Address },
    Loaded(TokenBalance),
    Failed { contract: Address, message: String },
}

/// Transaction history panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HistoryState {
    #[default]
    Idle,
    Loading,
    /// Records for `owner`, newest first
    Loaded {
        owner: Address,
        records: Vec<TransactionRecord>,
    },
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// One line in the activity log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Dashboard state shared between the command loop and background tasks
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub token: TokenLookup,
    pub send: SendStatus,
    pub history: HistoryState,
    pub notices: Vec<Notice>,
}

impl DashboardState {
    /// Append a notice, dropping the oldest past [`MAX_NOTICES`]
    pub fn push_notice(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice {
            level,
            message: message.into(),
            at: lib_utils::now_utc(),
        });
        if self.notices.len() > MAX_NOTICES {
            let excess = self.notices.len() - MAX_NOTICES;
            self.notices.drain(..excess);
        }
    }

    /// Forget per-account data (after disconnect or account switch)
    pub fn clear_account_data(&mut self) {
        self.token = TokenLookup::Idle;
        self.history = HistoryState::Idle;
        if !self.send.is_in_flight() {
            self.send = SendStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_are_bounded() {
        let mut state = DashboardState::default();
        for i in 0..(MAX_NOTICES + 5) {
            state.push_notice(NoticeLevel::Info, format!("notice {}", i));
        }
        assert_eq!(state.notices.len(), MAX_NOTICES);
        assert_eq!(state.notices[0].message, "notice 5");
    }

    #[test]
    fn test_in_flight() {
        assert!(SendStatus::Submitting.is_in_flight());
        assert!(SendStatus::Pending { hash: B256::ZERO }.is_in_flight());
        assert!(!SendStatus::Confirmed { hash: B256::ZERO }.is_in_flight());
        assert!(!SendStatus::Idle.is_in_flight());
    }
}
