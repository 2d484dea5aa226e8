//! # Provider Event Loop
//!
//! Single consumer of provider notifications. Each handler, including the
//! balance refresh it triggers, is awaited before the next message is taken,
//! so notifications are applied strictly in arrival order.
//!
//! ```text
//! WalletProvider ──try_send──► bounded channel ──recv──► ProviderEventLoop
//!                                                            │
//!                                                            ▼
//!                                          SessionManager::handle_provider_event
//! ```

use async_channel::Receiver;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::core::service::ProviderEvent;
use crate::session::manager::SessionManager;

/// Drains the provider notification channel into the session manager
pub struct ProviderEventLoop {
    manager: SessionManager,
    rx: Receiver<ProviderEvent>,
}

impl ProviderEventLoop {
    pub(crate) fn new(manager: SessionManager, rx: Receiver<ProviderEvent>) -> Self {
        Self { manager, rx }
    }

    /// Run until the channel is closed by [`SessionManager::shutdown`]
    pub async fn run(self) {
        info!("Provider event loop started");
        while let Ok(event) = self.rx.recv().await {
            debug!(kind = ?event.kind(), "Provider notification");
            self.manager.handle_provider_event(event).await;
        }
        info!("Provider event loop stopped");
    }

    /// Run on the tokio runtime
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}
