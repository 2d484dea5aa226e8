//! # Shared Utility Functions
//!
//! Common utility functions used by the dashboard and its DTOs.
//!
//! ## Address Formatting
//!
//! Functions for formatting `0x` account addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `0x` plus four hex digits on each side
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x742d...f44e");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
/// assert_eq!(format_address(addr, 6, 4), "0x742d...f44e");
/// assert_eq!(format_address(addr, 10, 8), "0x742d35Cc...4438f44e");
/// assert_eq!(format_address("0x12", 6, 4), "0x12");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Guard against individual lengths exceeding address length to prevent panics
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
        || !address.is_ascii()
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address as `0x` plus four leading and four trailing hex digits.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
/// assert_eq!(truncate_address(addr), "0x742d...f44e");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 6, 4), "0x742d...f44e");
        assert_eq!(format_address(ADDR, 2, 2), "0x...4e");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0x1234", 6, 4), "0x1234");
        assert_eq!(format_address("abc", 4, 4), "abc");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address(ADDR), "0x742d...f44e");
    }
}
