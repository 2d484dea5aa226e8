//! # Common Error Types
//!
//! Consolidated error handling for the dashboard.
//!
//! Three layers, from the wire upwards:
//!
//! - [`ProviderError`]: what a wallet/RPC call can fail with (transport, JSON-RPC
//!   error object, undecodable payload)
//! - [`SessionError`]: the taxonomy the session manager surfaces to callers
//!   (`ProviderUnavailable`, `UserRejected`, `TransientNetwork`, `Unknown`)
//! - [`AppError`]: application-wide error for dashboard actions (token lookups,
//!   sends, history), with a [`Result`] alias
//!
//! ## Error Conversion
//!
//! - `ProviderError` → `SessionError` (JSON-RPC code 4001 becomes `UserRejected`)
//! - `SessionError` → `AppError::Session`
//! - `ProviderError` → `AppError::Api`
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use dashboard::core::error::AppError;
//!
//! fn validate_limit(limit: usize) -> Result<usize, AppError> {
//!     if limit == 0 {
//!         return Err(AppError::Validation("Limit must be positive".to_string()));
//!     }
//!     Ok(limit)
//! }
//! ```

use shared::dto::rpc::{RpcErrorObject, DISCONNECTED_CODE, UNAUTHORIZED_CODE, USER_REJECTED_CODE};
use thiserror::Error;

/// Failure of a single call to the wallet provider or RPC endpoint.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    /// Nothing is listening at the provider endpoint
    #[error("Wallet provider unavailable: {0}")]
    Unavailable(String),

    /// Request failed in transit (timeout, HTTP 5xx, connection reset)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Provider answered with a JSON-RPC error object
    #[error("Provider error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Provider answered with something we could not interpret
    #[error("Unexpected provider response: {0}")]
    Decode(String),
}

impl ProviderError {
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, ProviderError::Rpc { code, .. } if *code == USER_REJECTED_CODE)
    }
}

impl From<RpcErrorObject> for ProviderError {
    fn from(err: RpcErrorObject) -> Self {
        ProviderError::Rpc {
            code: err.code,
            message: err.message,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ProviderError::Unavailable(err.to_string())
        } else if err.is_decode() {
            ProviderError::Decode(err.to_string())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

/// Errors surfaced by the session manager.
///
/// `Clone` so that every caller joined onto one in-flight connect attempt
/// receives the same outcome.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// No wallet provider reachable. Persistent until the next connect.
    #[error("No wallet provider detected. Start or unlock your wallet and try again.")]
    ProviderUnavailable,

    /// The user declined the consent prompt. Not recorded as `last_error`.
    #[error("Connection request rejected by user")]
    UserRejected,

    /// Network trouble talking to the provider; retrying may succeed.
    #[error("Network error: {0}")]
    TransientNetwork(String),

    /// Any other provider failure, message passed through.
    #[error("{0}")]
    Unknown(String),
}

impl SessionError {
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, SessionError::UserRejected)
    }
}

impl From<ProviderError> for SessionError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Unavailable(_) => SessionError::ProviderUnavailable,
            ProviderError::Rpc { code, .. } if code == USER_REJECTED_CODE => {
                SessionError::UserRejected
            }
            ProviderError::Rpc { code, .. } if code == DISCONNECTED_CODE => {
                SessionError::ProviderUnavailable
            }
            ProviderError::Rpc { code, .. } if code == UNAUTHORIZED_CODE => SessionError::Unknown(
                "Wallet is locked or has not authorized this account".to_string(),
            ),
            ProviderError::Rpc { message, .. } => SessionError::Unknown(message),
            ProviderError::Transport(msg) => SessionError::TransientNetwork(msg),
            ProviderError::Decode(msg) => SessionError::Unknown(msg),
        }
    }
}

/// Application-wide error type for dashboard actions.
#[derive(Debug, Error)]
pub enum AppError {
    /// Session state prevented or aborted the action
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// External API (RPC endpoint or block explorer) failure
    #[error("API error: {0}")]
    Api(String),

    /// Invalid user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Action not allowed in the current state (e.g. not connected)
    #[error("State error: {0}")]
    State(String),

    /// Invalid or missing configuration
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::Api(err.to_string())
    }
}

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_rejection_maps_to_user_rejected() {
        let err = ProviderError::Rpc {
            code: 4001,
            message: "User rejected the request.".to_string(),
        };
        assert!(err.is_user_rejection());
        assert_eq!(SessionError::from(err), SessionError::UserRejected);
    }

    #[test]
    fn test_unauthorized_maps_to_locked_wallet() {
        let err = SessionError::from(ProviderError::Rpc {
            code: 4100,
            message: "Unauthorized".into(),
        });
        assert!(matches!(err, SessionError::Unknown(msg) if msg.contains("locked")));
    }

    #[test]
    fn test_provider_error_taxonomy() {
        assert_eq!(
            SessionError::from(ProviderError::Unavailable("connection refused".into())),
            SessionError::ProviderUnavailable
        );
        assert_eq!(
            SessionError::from(ProviderError::Transport("timed out".into())),
            SessionError::TransientNetwork("timed out".into())
        );
        assert_eq!(
            SessionError::from(ProviderError::Rpc {
                code: -32603,
                message: "Internal error".into()
            }),
            SessionError::Unknown("Internal error".into())
        );
        assert_eq!(
            SessionError::from(ProviderError::Rpc {
                code: 4900,
                message: "Disconnected".into()
            }),
            SessionError::ProviderUnavailable
        );
    }

    #[test]
    fn test_display() {
        let err = AppError::from(SessionError::UserRejected);
        assert_eq!(err.to_string(), "Session error: Connection request rejected by user");
        let err = AppError::Validation("Amount must be greater than 0".to_string());
        assert_eq!(err.to_string(), "Validation error: Amount must be greater than 0");
    }
}
