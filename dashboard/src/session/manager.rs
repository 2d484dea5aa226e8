//! # Session Manager
//!
//! Owns the wallet session and is the only code that mutates it.
//!
//! ## State Machine
//!
//! ```text
//!            connect              ok
//!   ┌──────┐ ───────► ┌────────────┐ ───► ┌───────────┐
//!   │ Idle │          │ Connecting │      │ Connected │
//!   └──────┘ ◄─────── └────────────┘      └───────────┘
//!      ▲   user rejected    │ failure         │
//!      │                    ▼                 │ disconnect /
//!      │  disconnect   ┌───────┐              │ empty accounts
//!      ├────────────── │ Error │              │
//!      │               └───────┘              │
//!      └──────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//!
//! - Concurrent `connect()` calls join one shared in-flight attempt, so the
//!   provider is prompted once and listeners are registered once.
//! - `disconnect()` never cancels in-flight calls. It bumps the session epoch;
//!   a connect or balance read that resolves under an older epoch is dropped.
//! - Locks are never held across an `.await`. When both are needed the
//!   in-flight slot is locked before the session.

use std::sync::Arc;

use alloy_primitives::{Address, U256};
use async_channel::Sender;
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::{Mutex, RwLock};
use shared::dto::network::parse_chain_id_hex;
use tracing::{debug, info, warn};

use crate::core::error::SessionError;
use crate::core::service::{ProviderEvent, ProviderEventKind, WalletProvider};
use crate::session::event_loop::ProviderEventLoop;
use crate::session::state::{Session, SessionSnapshot, SessionStatus, Subscriptions};

type ConnectFuture = Shared<BoxFuture<'static, Result<SessionSnapshot, SessionError>>>;

struct InFlight {
    epoch: u64,
    future: ConnectFuture,
}

/// What a successful connect read from the provider
struct Established {
    address: Address,
    balance: U256,
    chain_id: u64,
}

struct Inner {
    session: RwLock<Session>,
    provider: Arc<dyn WalletProvider>,
    event_tx: Sender<ProviderEvent>,
    in_flight: Mutex<Option<InFlight>>,
}

/// Wallet session manager
///
/// Cheap to clone; all clones share one session. Construct exactly one per
/// application in `main` and call [`shutdown`](Self::shutdown) on exit.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<Inner>,
}

impl SessionManager {
    /// Create the manager and the loop that feeds it provider notifications.
    ///
    /// `capacity` bounds the notification channel and must be positive.
    pub fn new(provider: Arc<dyn WalletProvider>, capacity: usize) -> (Self, ProviderEventLoop) {
        let (event_tx, event_rx) = async_channel::bounded(capacity.max(1));
        let manager = Self {
            inner: Arc::new(Inner {
                session: RwLock::new(Session::default()),
                provider,
                event_tx,
                in_flight: Mutex::new(None),
            }),
        };
        let event_loop = ProviderEventLoop::new(manager.clone(), event_rx);
        (manager, event_loop)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.session.read().snapshot()
    }

    /// Connect to the wallet, or join the attempt already in flight.
    ///
    /// Returns the current snapshot when already connected. A result that
    /// arrives after a `disconnect()` is discarded and the (idle) snapshot at
    /// that moment is returned instead.
    pub async fn connect(&self) -> Result<SessionSnapshot, SessionError> {
        let attempt = {
            let mut in_flight = self.inner.in_flight.lock();
            let joined = in_flight
                .as_ref()
                .map(|attempt| (attempt.epoch, attempt.future.clone()));
            match joined {
                Some((epoch, future)) => {
                    debug!(epoch, "Joining in-flight connect attempt");
                    future
                }
                None => {
                    let mut session = self.inner.session.write();
                    if session.status == SessionStatus::Connected {
                        return Ok(session.snapshot());
                    }
                    session.status = SessionStatus::Connecting;
                    let epoch = session.epoch;
                    drop(session);

                    info!(epoch, "Connecting to wallet provider");
                    let inner = self.inner.clone();
                    let future = inner.run_connect(epoch).boxed().shared();
                    *in_flight = Some(InFlight {
                        epoch,
                        future: future.clone(),
                    });
                    future
                }
            }
        }; // Lock released here

        attempt.await
    }

    /// Drop the session. Idempotent.
    ///
    /// Only deregisters local listeners; the wallet keeps its own permission.
    pub fn disconnect(&self) {
        let (subscriptions, previous) = {
            let mut in_flight = self.inner.in_flight.lock();
            let mut session = self.inner.session.write();
            let previous = session.status;
            let subscriptions = session.subscriptions.take();
            session.reset();
            in_flight.take();
            (subscriptions, previous)
        }; // Lock released here

        if let Some(subs) = subscriptions {
            self.inner.provider.unsubscribe(subs.accounts);
            self.inner.provider.unsubscribe(subs.chain);
        }

        if previous != SessionStatus::Idle {
            info!(previous = ?previous, "Wallet session disconnected");
        }
    }

    /// Re-read the balance of the current address.
    ///
    /// No-op without an address. On failure the previous balance is kept and
    /// status/last_error are left alone.
    pub async fn refresh_balance(&self) -> SessionSnapshot {
        let (address, epoch) = {
            let session = self.inner.session.read();
            match session.address {
                Some(address) => (address, session.epoch),
                None => return session.snapshot(),
            }
        }; // Lock released here

        match self.inner.provider.get_balance(address).await {
            Ok(balance) => {
                let mut session = self.inner.session.write();
                if session.epoch == epoch && session.address == Some(address) {
                    session.balance_minor = Some(balance);
                    debug!(address = %address, balance = %balance, "Balance refreshed");
                } else {
                    debug!(address = %address, "Discarding stale balance");
                }
                session.snapshot()
            }
            Err(e) => {
                warn!(address = %address, error = %e, "Balance refresh failed; keeping previous balance");
                self.snapshot()
            }
        }
    }

    /// Provider reported a new account list.
    pub async fn on_accounts_changed(&self, accounts: Vec<Address>) {
        {
            let mut session = self.inner.session.write();
            if session.status != SessionStatus::Connected {
                debug!(count = accounts.len(), "Ignoring accounts change while not connected");
                return;
            }
            match accounts.first() {
                None => {
                    drop(session);
                    info!("Wallet returned no accounts; disconnecting");
                    self.disconnect();
                    return;
                }
                Some(&address) => {
                    if session.address != Some(address) {
                        info!(
                            from = ?session.address,
                            to = %address,
                            "Active account changed"
                        );
                        session.address = Some(address);
                        // Old balance belongs to the old account
                        session.balance_minor = None;
                    }
                }
            }
        } // Lock released here

        self.refresh_balance().await;
    }

    /// Provider switched networks. `chain_id_hex` is the raw hex quantity.
    pub async fn on_chain_changed(&self, chain_id_hex: &str) {
        let Some(chain_id) = parse_chain_id_hex(chain_id_hex) else {
            warn!(chain_id = chain_id_hex, "Ignoring unparseable chain id");
            return;
        };

        {
            let mut session = self.inner.session.write();
            if session.status != SessionStatus::Connected {
                debug!(chain_id, "Ignoring chain change while not connected");
                return;
            }
            session.set_chain(chain_id);
            info!(
                chain_id,
                network = session.network_label.as_deref().unwrap_or_default(),
                "Network changed"
            );
        } // Lock released here

        self.refresh_balance().await;
    }

    /// Dispatch one provider notification
    pub async fn handle_provider_event(&self, event: ProviderEvent) {
        match event {
            ProviderEvent::AccountsChanged(accounts) => self.on_accounts_changed(accounts).await,
            ProviderEvent::ChainChanged(chain_id) => self.on_chain_changed(&chain_id).await,
        }
    }

    /// Disconnect and close the notification channel, ending the event loop.
    pub fn shutdown(&self) {
        self.disconnect();
        self.inner.event_tx.close();
        info!("Session manager shut down");
    }
}

impl Inner {
    async fn run_connect(self: Arc<Self>, epoch: u64) -> Result<SessionSnapshot, SessionError> {
        let result = match self.establish().await {
            Ok(established) => Ok(self.apply_connected(epoch, established)),
            Err(err) => Err(self.apply_failure(epoch, err)),
        };

        {
            let mut in_flight = self.in_flight.lock();
            if in_flight.as_ref().map(|attempt| attempt.epoch) == Some(epoch) {
                *in_flight = None;
            }
        }
        result
    }

    async fn establish(&self) -> Result<Established, SessionError> {
        if !self.provider.probe().await {
            return Err(SessionError::ProviderUnavailable);
        }

        let accounts = self.provider.request_accounts().await?;
        let address = accounts
            .first()
            .copied()
            .ok_or_else(|| SessionError::Unknown("Wallet returned no accounts".to_string()))?;
        let balance = self.provider.get_balance(address).await?;
        let chain_id = self.provider.get_chain_id().await?;

        Ok(Established {
            address,
            balance,
            chain_id,
        })
    }

    fn apply_connected(&self, epoch: u64, established: Established) -> SessionSnapshot {
        let mut session = self.session.write();
        if session.epoch != epoch {
            debug!(epoch, current = session.epoch, "Discarding connect result from a previous session");
            return session.snapshot();
        }

        let subscriptions = Subscriptions {
            accounts: self
                .provider
                .subscribe(ProviderEventKind::AccountsChanged, self.event_tx.clone()),
            chain: self
                .provider
                .subscribe(ProviderEventKind::ChainChanged, self.event_tx.clone()),
        };

        session.address = Some(established.address);
        session.balance_minor = Some(established.balance);
        session.set_chain(established.chain_id);
        session.status = SessionStatus::Connected;
        session.last_error = None;
        session.subscriptions = Some(subscriptions);

        info!(
            address = %established.address,
            chain_id = established.chain_id,
            balance = %established.balance,
            "Wallet connected"
        );
        session.snapshot()
    }

    fn apply_failure(&self, epoch: u64, err: SessionError) -> SessionError {
        let mut session = self.session.write();
        if session.epoch != epoch {
            debug!(epoch, error = %err, "Discarding connect failure from a previous session");
            return err;
        }

        if err.is_user_rejection() {
            session.status = SessionStatus::Idle;
            session.last_error = None;
            info!("Connection request rejected by user");
        } else {
            session.status = SessionStatus::Error;
            session.last_error = Some(err.to_string());
            warn!(error = %err, "Wallet connection failed");
        }
        err
    }
}
