//! # Application Configuration
//!
//! Runtime settings loaded from the environment (and an optional `.env` file).
//!
//! | Variable                         | Default                  |
//! |----------------------------------|--------------------------|
//! | `DASHBOARD_RPC_URL`              | `http://127.0.0.1:8545`  |
//! | `DASHBOARD_EXPLORER_API_KEY`     | unset                    |
//! | `DASHBOARD_POLL_INTERVAL_MS`     | `2000`                   |
//! | `DASHBOARD_EVENT_QUEUE`          | `64`                     |
//! | `DASHBOARD_HISTORY_LIMIT`        | `10`                     |
//! | `DASHBOARD_CONFIRM_TIMEOUT_SECS` | `120`                    |

use std::path::PathBuf;
use std::time::Duration;

use lib_utils::envs::{get_env, get_env_or, get_env_parse_or};

use crate::core::error::{AppError, Result};

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2_000;
pub const DEFAULT_EVENT_QUEUE: usize = 64;
pub const DEFAULT_HISTORY_LIMIT: usize = 10;
pub const DEFAULT_CONFIRM_TIMEOUT_SECS: u64 = 120;

/// Load `.env` from the working directory (or a parent) into the process
/// environment. Variables already set are kept.
///
/// Call before anything reads the environment, the logger included.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(e) if e.not_found() => None,
        Err(e) => {
            eprintln!("Warning: Failed to read .env: {}", e);
            None
        }
    }
}

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON-RPC endpoint of the wallet provider
    pub rpc_url: String,
    /// Block explorer API key (history works keyless at a reduced rate limit)
    pub explorer_api_key: Option<String>,
    /// How often the provider watcher polls for account/chain changes
    pub poll_interval: Duration,
    /// Capacity of the provider notification channel
    pub event_queue: usize,
    /// Default number of history entries
    pub history_limit: usize,
    /// How long a sent transaction may stay unconfirmed
    pub confirm_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            explorer_api_key: None,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            event_queue: DEFAULT_EVENT_QUEUE,
            history_limit: DEFAULT_HISTORY_LIMIT,
            confirm_timeout: Duration::from_secs(DEFAULT_CONFIRM_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Expects [`load_dotenv`] to have run. Malformed numeric values are an
    /// error rather than silently falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let config = Self {
            rpc_url: get_env_or("DASHBOARD_RPC_URL", DEFAULT_RPC_URL),
            explorer_api_key: get_env("DASHBOARD_EXPLORER_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            poll_interval: Duration::from_millis(get_env_parse_or(
                "DASHBOARD_POLL_INTERVAL_MS",
                DEFAULT_POLL_INTERVAL_MS,
            )?),
            event_queue: get_env_parse_or("DASHBOARD_EVENT_QUEUE", DEFAULT_EVENT_QUEUE)?,
            history_limit: get_env_parse_or("DASHBOARD_HISTORY_LIMIT", DEFAULT_HISTORY_LIMIT)?,
            confirm_timeout: Duration::from_secs(get_env_parse_or(
                "DASHBOARD_CONFIRM_TIMEOUT_SECS",
                DEFAULT_CONFIRM_TIMEOUT_SECS,
            )?),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.rpc_url.trim().is_empty() {
            return Err(AppError::Config("DASHBOARD_RPC_URL is empty".to_string()));
        }
        if self.poll_interval.is_zero() {
            return Err(AppError::Config(
                "DASHBOARD_POLL_INTERVAL_MS must be positive".to_string(),
            ));
        }
        // async_channel::bounded panics on zero capacity
        if self.event_queue == 0 {
            return Err(AppError::Config("DASHBOARD_EVENT_QUEUE must be positive".to_string()));
        }
        if self.history_limit == 0 {
            return Err(AppError::Config("DASHBOARD_HISTORY_LIMIT must be positive".to_string()));
        }
        Ok(())
    }
}
