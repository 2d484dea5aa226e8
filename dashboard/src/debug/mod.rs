//! # Logging Infrastructure
//!
//! File-based structured logging for the dashboard. The command loop owns
//! stdout, so log output goes to `logs/dashboard.log` (daily rotation).
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at startup, keep the guard alive until exit
//! let _guard = dashboard::debug::init_logger();
//!
//! tracing::info!(chain_id = 1, "Network changed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `dashboard=debug,info`)
//! - `DASHBOARD_LOG_DIR`: Log directory (default: `logs`)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;
