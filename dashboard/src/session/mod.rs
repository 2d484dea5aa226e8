//! # Wallet Session
//!
//! The connection/session state machine at the heart of the dashboard.
//!
//! - **[`manager`]**: [`SessionManager`], the only writer of session state
//! - **[`state`]**: [`Session`] record, [`SessionStatus`] and read-only [`SessionSnapshot`]
//! - **[`event_loop`]**: [`ProviderEventLoop`], ordered delivery of provider notifications
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dashboard::session::SessionManager;
//! # async fn run(provider: Arc<dyn dashboard::core::WalletProvider>) {
//! let (manager, event_loop) = SessionManager::new(provider, 64);
//! let loop_handle = event_loop.spawn();
//!
//! match manager.connect().await {
//!     Ok(snapshot) => println!("connected: {:?}", snapshot.address),
//!     Err(e) => eprintln!("{}", e),
//! }
//!
//! manager.shutdown();
//! let _ = loop_handle.await;
//! # }
//! ```

pub mod event_loop;
pub mod manager;
pub mod state;

pub use event_loop::ProviderEventLoop;
pub use manager::SessionManager;
pub use state::{Session, SessionSnapshot, SessionStatus, Subscriptions};
