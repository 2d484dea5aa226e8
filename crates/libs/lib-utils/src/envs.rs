//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, falling back to `default` when unset or empty.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    match get_env(name) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => default.to_string(),
    }
}

/// Get and parse an environment variable, falling back to `default` when unset.
///
/// A value that is present but unparseable is reported rather than silently
/// replaced, so a typo in a config file does not go unnoticed.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match get_env(name) {
        Ok(val) if val.trim().is_empty() => Ok(default),
        Ok(val) => val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name)),
        Err(_) => Ok(default),
    }
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env() {
        assert_eq!(
            get_env("LIB_UTILS_TEST_SURELY_UNSET"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_SURELY_UNSET"))
        );
        assert_eq!(get_env_or("LIB_UTILS_TEST_SURELY_UNSET", "fallback"), "fallback");
        assert_eq!(get_env_parse_or("LIB_UTILS_TEST_SURELY_UNSET", 42u64), Ok(42));
    }
}
