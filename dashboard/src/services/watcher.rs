//! # Provider Watcher
//!
//! An HTTP JSON-RPC endpoint cannot push `accountsChanged` / `chainChanged`,
//! so the watcher polls `eth_accounts` and `eth_chainId` and turns changes
//! into [`ProviderEvent`]s.
//!
//! ```text
//!  ┌────────────┐  every poll_interval   ┌──────────────┐  try_send   ┌──────────────┐
//!  │ poll task  │ ─────────────────────► │ ChangeTracker│ ──────────► │ subscribers  │
//!  └────────────┘  eth_accounts/chainId  └──────────────┘             └──────────────┘
//! ```
//!
//! The poll task runs only while at least one subscription exists. The first
//! poll records a baseline and emits nothing.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::Address;
use async_channel::{Sender, TrySendError};
use parking_lot::Mutex;
use serde_json::json;
use shared::dto::network::parse_chain_id_hex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::core::service::{ProviderEvent, ProviderEventKind, SubscriptionId};
use crate::services::rpc::RpcClient;

type SubscriberMap = HashMap<SubscriptionId, (ProviderEventKind, Sender<ProviderEvent>)>;

/// Registered listeners, shared with the poll task
#[derive(Clone, Default)]
pub(crate) struct Subscribers {
    inner: Arc<Mutex<SubscriberMap>>,
}

impl Subscribers {
    fn insert(&self, kind: ProviderEventKind, sender: Sender<ProviderEvent>) -> (SubscriptionId, bool) {
        let id = SubscriptionId::new();
        let mut map = self.inner.lock();
        let was_empty = map.is_empty();
        map.insert(id, (kind, sender));
        (id, was_empty)
    }

    /// Returns true when the last subscription was removed
    fn remove(&self, id: SubscriptionId) -> bool {
        let mut map = self.inner.lock();
        map.remove(&id).is_some() && map.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Deliver `event` to every listener of its kind, dropping closed ones.
    pub(crate) fn dispatch(&self, event: &ProviderEvent) {
        let kind = event.kind();
        let targets: Vec<(SubscriptionId, Sender<ProviderEvent>)> = self
            .inner
            .lock()
            .iter()
            .filter(|(_, (k, _))| *k == kind)
            .map(|(id, (_, tx))| (*id, tx.clone()))
            .collect(); // Lock released here

        for (id, tx) in targets {
            match tx.try_send(event.clone()) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    warn!(subscription = %id, kind = ?kind, "Notification queue full; dropping event");
                }
                Err(TrySendError::Closed(_)) => {
                    debug!(subscription = %id, "Removing closed subscription");
                    self.inner.lock().remove(&id);
                }
            }
        }
    }
}

/// Remembers the last observed accounts and chain
#[derive(Debug, Default)]
pub(crate) struct ChangeTracker {
    accounts: Option<Vec<Address>>,
    chain_id: Option<u64>,
}

impl ChangeTracker {
    pub(crate) fn observe_accounts(&mut self, accounts: Vec<Address>) -> Option<ProviderEvent> {
        let changed = matches!(&self.accounts, Some(previous) if *previous != accounts);
        self.accounts = Some(accounts.clone());
        changed.then_some(ProviderEvent::AccountsChanged(accounts))
    }

    /// Compares parsed ids so `0x01` and `0x1` are the same chain
    pub(crate) fn observe_chain(&mut self, chain_id_hex: String) -> Option<ProviderEvent> {
        let parsed = parse_chain_id_hex(&chain_id_hex);
        let changed = matches!(self.chain_id, Some(previous) if Some(previous) != parsed);
        if parsed.is_some() {
            self.chain_id = parsed;
        }
        changed.then_some(ProviderEvent::ChainChanged(chain_id_hex))
    }
}

/// Polls the provider and fans out change notifications
pub struct ProviderWatcher {
    rpc: Arc<RpcClient>,
    interval: Duration,
    subscribers: Subscribers,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl ProviderWatcher {
    pub fn new(rpc: Arc<RpcClient>, interval: Duration) -> Self {
        Self {
            rpc,
            interval,
            subscribers: Subscribers::default(),
            task: Mutex::new(None),
        }
    }

    pub fn subscribe(&self, kind: ProviderEventKind, sender: Sender<ProviderEvent>) -> SubscriptionId {
        let (id, first) = self.subscribers.insert(kind, sender);
        debug!(subscription = %id, kind = ?kind, "Subscribed to provider notifications");
        if first {
            self.start();
        }
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        if self.subscribers.remove(id) {
            self.stop();
        }
        debug!(subscription = %id, "Unsubscribed from provider notifications");
    }

    fn start(&self) {
        let mut task = self.task.lock();
        if task.as_ref().is_some_and(|handle| !handle.is_finished()) {
            return;
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No tokio runtime; provider changes will not be watched");
            return;
        };

        info!(interval_ms = self.interval.as_millis() as u64, "Starting provider watcher");
        *task = Some(runtime.spawn(poll_loop(
            self.rpc.clone(),
            self.interval,
            self.subscribers.clone(),
        )));
    }

    fn stop(&self) {
        if let Some(handle) = self.task.lock().take() {
            handle.abort();
            info!("Provider watcher stopped");
        }
    }
}

impl Drop for ProviderWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn poll_loop(rpc: Arc<RpcClient>, interval: Duration, subscribers: Subscribers) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut tracker = ChangeTracker::default();

    loop {
        ticker.tick().await;

        match rpc.request::<Vec<Address>>("eth_accounts", json!([])).await {
            Ok(accounts) => {
                if let Some(event) = tracker.observe_accounts(accounts) {
                    info!(event = ?event, "Provider accounts changed");
                    subscribers.dispatch(&event);
                }
            }
            Err(e) => debug!(error = %e, "eth_accounts poll failed"),
        }

        match rpc.request::<String>("eth_chainId", json!([])).await {
            Ok(chain_id) => {
                if let Some(event) = tracker.observe_chain(chain_id) {
                    info!(event = ?event, "Provider chain changed");
                    subscribers.dispatch(&event);
                }
            }
            Err(e) => debug!(error = %e, "eth_chainId poll failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_is_baseline() {
        let mut tracker = ChangeTracker::default();
        assert!(tracker.observe_accounts(vec![Address::repeat_byte(1)]).is_none());
        assert!(tracker.observe_chain("0x1".to_string()).is_none());
    }

    #[test]
    fn test_changes_emit_events() {
        let mut tracker = ChangeTracker::default();
        tracker.observe_accounts(vec![Address::repeat_byte(1)]);
        tracker.observe_chain("0x1".to_string());

        assert_eq!(tracker.observe_accounts(vec![Address::repeat_byte(1)]), None);
        assert_eq!(
            tracker.observe_accounts(Vec::new()),
            Some(ProviderEvent::AccountsChanged(Vec::new()))
        );
        assert_eq!(tracker.observe_chain("0x01".to_string()), None);
        assert_eq!(
            tracker.observe_chain("0xaa36a7".to_string()),
            Some(ProviderEvent::ChainChanged("0xaa36a7".to_string()))
        );
    }

    #[test]
    fn test_dispatch_filters_by_kind_and_prunes_closed() {
        let subscribers = Subscribers::default();
        let (accounts_tx, accounts_rx) = async_channel::bounded(4);
        let (chain_tx, chain_rx) = async_channel::bounded(4);
        subscribers.insert(ProviderEventKind::AccountsChanged, accounts_tx);
        subscribers.insert(ProviderEventKind::ChainChanged, chain_tx);

        subscribers.dispatch(&ProviderEvent::ChainChanged("0x89".to_string()));
        assert!(accounts_rx.try_recv().is_err());
        assert_eq!(
            chain_rx.try_recv().unwrap(),
            ProviderEvent::ChainChanged("0x89".to_string())
        );

        drop(accounts_rx);
        subscribers.dispatch(&ProviderEvent::AccountsChanged(Vec::new()));
        assert_eq!(subscribers.len(), 1);
    }
}
