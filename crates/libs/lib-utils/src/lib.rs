//! # Utilities Library
//!
//! Shared utility functions for environment variables, time formatting, and validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse_or};
pub use time::{format_unix_timestamp, now_utc};
pub use validation::{validate_max_length, validate_not_empty};
