//! # Input Validation
//!
//! Parsing of user-typed addresses and amounts into typed values, with
//! user-facing error messages.

use alloy_primitives::{Address, U256};

use super::units::parse_ether;

/// Parse an address, returning a user-facing message on failure
///
/// Accepts `0x` followed by 40 hex digits. All-lowercase and all-uppercase
/// input is accepted as-is; mixed case must carry a valid EIP-55 checksum.
pub fn parse_address(address: &str) -> Result<Address, String> {
    let address = address.trim();
    if address.is_empty() {
        return Err("Address is required".to_string());
    }

    let digits = match address.strip_prefix("0x").or_else(|| address.strip_prefix("0X")) {
        Some(digits) => digits,
        None => return Err("Address must start with 0x".to_string()),
    };

    if digits.len() != 40 {
        return Err(format!("Address must have 40 hex digits, got {}", digits.len()));
    }

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("Address contains non-hex characters".to_string());
    }

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        let with_prefix = format!("0x{}", digits);
        return Address::parse_checksummed(&with_prefix, None)
            .map_err(|_| "Address checksum is invalid".to_string());
    }

    digits
        .parse::<Address>()
        .map_err(|e| format!("Invalid address: {}", e))
}

/// Parse an ETH amount for sending; must be strictly positive
pub fn parse_send_amount(amount: &str) -> Result<U256, String> {
    lib_utils::validate_not_empty(amount, "Amount")?;
    lib_utils::validate_max_length(amount.trim(), 40, "Amount")?;

    let wei = parse_ether(amount)?;
    if wei.is_zero() {
        return Err("Amount must be greater than 0".to_string());
    }
    Ok(wei)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKSUMMED: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn test_address_validation() {
        assert!(parse_address(CHECKSUMMED).is_ok());
        assert!(parse_address(&CHECKSUMMED.to_lowercase()).is_ok());
        assert!(parse_address("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED").is_ok());
        assert_eq!(parse_address(""), Err("Address is required".to_string()));
        assert!(parse_address("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").is_err()); // no prefix
        assert!(parse_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeA").is_err()); // too short
        assert!(parse_address("0xZZAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").is_err());
    }

    #[test]
    fn test_bad_checksum_rejected() {
        // last character case flipped
        assert_eq!(
            parse_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD"),
            Err("Address checksum is invalid".to_string())
        );
    }

    #[test]
    fn test_parse_address_value() {
        let parsed = parse_address(&CHECKSUMMED.to_lowercase()).unwrap();
        assert_eq!(parsed.to_checksum(None), CHECKSUMMED);
    }

    #[test]
    fn test_amount_validation() {
        assert_eq!(
            parse_send_amount("0.01"),
            Ok(U256::from(10_000_000_000_000_000u128))
        );
        assert!(parse_send_amount("3").is_ok());
        assert!(parse_send_amount("").is_err());
        assert!(parse_send_amount("0").is_err());
        assert!(parse_send_amount("0.000").is_err());
        assert!(parse_send_amount("-1").is_err());
        assert!(parse_send_amount("one").is_err());
    }

    #[test]
    fn test_amount_below_one_wei_rejected() {
        let err = parse_send_amount("0.0000000000000000001").unwrap_err();
        assert!(err.contains("decimal places"), "{}", err);
        assert!(parse_send_amount("1.0000000000000000009").is_err());
    }
}
