//! # Session State
//!
//! The wallet session record owned by [`SessionManager`](super::SessionManager)
//! and the read-only [`SessionSnapshot`] handed out to everyone else.
//!
//! ## Invariants
//!
//! - `address` is present iff `status == Connected`
//! - `subscriptions` is present iff `status == Connected`
//! - `network_label` is always derived from `chain_id`

use alloy_primitives::{Address, U256};
use shared::dto::network::network_label;
use shared::utils::truncate_address;

use crate::core::service::SubscriptionId;
use crate::utils::units::format_balance;

/// Connection lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Connecting,
    Connected,
    Error,
}

impl SessionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Idle => "Disconnected",
            SessionStatus::Connecting => "Connecting...",
            SessionStatus::Connected => "Connected",
            SessionStatus::Error => "Error",
        }
    }
}

/// Handles of the two provider change listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscriptions {
    pub accounts: SubscriptionId,
    pub chain: SubscriptionId,
}

/// Mutable session record. Only the session manager writes it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub(crate) address: Option<Address>,
    pub(crate) balance_minor: Option<U256>,
    pub(crate) chain_id: Option<u64>,
    pub(crate) network_label: Option<String>,
    pub(crate) status: SessionStatus,
    pub(crate) last_error: Option<String>,
    pub(crate) subscriptions: Option<Subscriptions>,
    /// Bumped on every reset; results captured under an older epoch are dropped
    pub(crate) epoch: u64,
}

impl Session {
    pub(crate) fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            address: self.address,
            balance_minor: self.balance_minor,
            chain_id: self.chain_id,
            network_label: self.network_label.clone(),
            status: self.status,
            last_error: self.last_error.clone(),
            listening: self.subscriptions.is_some(),
        }
    }

    /// Return every field to absent and `Idle`, advancing the epoch
    pub(crate) fn reset(&mut self) {
        let epoch = self.epoch.wrapping_add(1);
        *self = Session {
            epoch,
            ..Session::default()
        };
    }

    pub(crate) fn set_chain(&mut self, chain_id: u64) {
        self.chain_id = Some(chain_id);
        self.network_label = Some(network_label(chain_id));
    }
}

/// Point-in-time copy of the session for display and tests
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub address: Option<Address>,
    pub balance_minor: Option<U256>,
    pub chain_id: Option<u64>,
    pub network_label: Option<String>,
    pub status: SessionStatus,
    pub last_error: Option<String>,
    /// Whether change listeners are registered
    pub listening: bool,
}

impl SessionSnapshot {
    pub fn is_connected(&self) -> bool {
        self.status == SessionStatus::Connected
    }

    /// Balance as `1,234.5678 ETH`, if known
    pub fn balance_display(&self) -> Option<String> {
        self.balance_minor.map(|wei| format!("{} ETH", format_balance(wei)))
    }

    /// Address as `0x1234...abcd`, if connected
    pub fn short_address(&self) -> Option<String> {
        self.address.map(|addr| truncate_address(&addr.to_checksum(None)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_bumps_epoch_and_clears() {
        let mut session = Session {
            address: Some(Address::repeat_byte(0x11)),
            balance_minor: Some(U256::from(5u64)),
            status: SessionStatus::Connected,
            last_error: Some("old".to_string()),
            epoch: 7,
            ..Session::default()
        };
        session.set_chain(1);
        session.reset();

        assert_eq!(session.epoch, 8);
        assert_eq!(session.snapshot(), SessionSnapshot::default());
    }

    #[test]
    fn test_set_chain_derives_label() {
        let mut session = Session::default();
        session.set_chain(11155111);
        assert_eq!(session.network_label.as_deref(), Some("Sepolia Testnet"));
        session.set_chain(42);
        assert_eq!(session.network_label.as_deref(), Some("Chain ID: 42"));
    }

    #[test]
    fn test_snapshot_display_helpers() {
        let snapshot = SessionSnapshot {
            address: Some(Address::repeat_byte(0x12)),
            balance_minor: Some(U256::from(1_500_000_000_000_000_000u128)),
            status: SessionStatus::Connected,
            ..SessionSnapshot::default()
        };
        assert_eq!(snapshot.balance_display().as_deref(), Some("1.5000 ETH"));
        assert_eq!(snapshot.short_address().as_deref(), Some("0x1212...1212"));
        assert!(snapshot.is_connected());
    }
}
