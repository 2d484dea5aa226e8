//! # Utility Functions
//!
//! Shared utility functions used across the dashboard.
//!
//! ## Modules
//!
//! - **[`units`]**: Wei ↔ ETH and token unit conversion for display and input
//! - **[`validation`]**: Input validation (addresses, amounts)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (address formatting)
//! - [`crate::core`]: Core abstractions and error types

pub mod units;
pub mod validation;
