//! # Unit Conversion
//!
//! Conversions between integer minor units (wei, token base units) and the
//! decimal strings shown to and typed by the user. The arithmetic is delegated
//! to `alloy_primitives::utils`; this module only shapes the output.

use alloy_primitives::utils::{format_units as alloy_format_units, parse_units as alloy_parse_units};
use alloy_primitives::U256;

/// Decimals of the native currency (wei → ETH)
pub const ETHER_DECIMALS: u8 = 18;

/// Fractional digits shown for balances in the summary view
pub const DISPLAY_PRECISION: usize = 4;

/// Format a minor-unit amount with trailing fractional zeros removed.
///
/// # Examples
///
/// ```rust
/// use alloy_primitives::U256;
/// use dashboard::utils::units::format_units;
///
/// assert_eq!(format_units(U256::from(1_500_000u64), 6), "1.5");
/// assert_eq!(format_units(U256::from(2_000_000u64), 6), "2");
/// ```
pub fn format_units(value: U256, decimals: u8) -> String {
    match alloy_format_units(value, decimals) {
        Ok(formatted) => trim_fraction(&formatted),
        // decimals > 77 cannot be represented; show the raw integer
        Err(_) => value.to_string(),
    }
}

/// Format wei as ETH with trailing zeros removed.
///
/// # Examples
///
/// ```rust
/// use alloy_primitives::U256;
/// use dashboard::utils::units::format_ether;
///
/// assert_eq!(format_ether(U256::from(1_250_000_000_000_000_000u128)), "1.25");
/// ```
pub fn format_ether(wei: U256) -> String {
    format_units(wei, ETHER_DECIMALS)
}

/// Format a minor-unit amount with a fixed number of fractional digits and
/// thousands separators, truncating (never rounding up) extra precision.
///
/// # Examples
///
/// ```rust
/// use alloy_primitives::U256;
/// use dashboard::utils::units::format_units_fixed;
///
/// assert_eq!(format_units_fixed(U256::from(1_234_567_891u64), 6, 4), "1,234.5678");
/// assert_eq!(format_units_fixed(U256::ZERO, 18, 4), "0.0000");
/// ```
pub fn format_units_fixed(value: U256, decimals: u8, precision: usize) -> String {
    let full = match alloy_format_units(value, decimals) {
        Ok(formatted) => formatted,
        Err(_) => value.to_string(),
    };

    let (integer_part, fraction_part) = match full.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (full.as_str(), ""),
    };

    let mut fraction: String = fraction_part.chars().take(precision).collect();
    while fraction.len() < precision {
        fraction.push('0');
    }

    let integer_with_commas = group_thousands(integer_part);
    if precision == 0 {
        integer_with_commas
    } else {
        format!("{}.{}", integer_with_commas, fraction)
    }
}

/// Balance summary form: ETH with [`DISPLAY_PRECISION`] digits.
pub fn format_balance(wei: U256) -> String {
    format_units_fixed(wei, ETHER_DECIMALS, DISPLAY_PRECISION)
}

/// Parse a user-typed decimal amount into minor units.
///
/// Significant fractional digits beyond `decimals` are an error, never a
/// truncation.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256, String> {
    let trimmed = amount.trim();
    if trimmed.starts_with('-') {
        return Err("Amount cannot be negative".to_string());
    }
    let well_formed = trimmed.chars().any(|c| c.is_ascii_digit())
        && trimmed.chars().all(|c| c.is_ascii_digit() || c == '.')
        && trimmed.matches('.').count() <= 1;
    if !well_formed {
        return Err(format!("Invalid amount '{}'", trimmed));
    }
    if let Some((_, fraction)) = trimmed.split_once('.') {
        if fraction.trim_end_matches('0').len() > usize::from(decimals) {
            return Err(format!(
                "Invalid amount '{}': at most {} decimal places allowed",
                trimmed, decimals
            ));
        }
    }
    alloy_parse_units(trimmed, decimals)
        .map(|parsed| parsed.get_absolute())
        .map_err(|e| format!("Invalid amount '{}': {}", trimmed, e))
}

/// Parse an ETH amount into wei.
///
/// # Examples
///
/// ```rust
/// use alloy_primitives::U256;
/// use dashboard::utils::units::parse_ether;
///
/// assert_eq!(parse_ether("0.5").unwrap(), U256::from(500_000_000_000_000_000u128));
/// assert!(parse_ether("abc").is_err());
/// ```
pub fn parse_ether(amount: &str) -> Result<U256, String> {
    parse_units(amount, ETHER_DECIMALS)
}

fn trim_fraction(formatted: &str) -> String {
    match formatted.split_once('.') {
        Some((int, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                int.to_string()
            } else {
                format!("{}.{}", int, frac)
            }
        }
        None => formatted.to_string(),
    }
}

fn group_thousands(integer_part: &str) -> String {
    let mut result = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_ETHER: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn test_format_ether() {
        assert_eq!(format_ether(U256::from(ONE_ETHER)), "1");
        assert_eq!(format_ether(U256::from(ONE_ETHER / 10)), "0.1");
        assert_eq!(format_ether(U256::from(1u64)), "0.000000000000000001");
        assert_eq!(format_ether(U256::ZERO), "0");
    }

    #[test]
    fn test_format_balance_truncates() {
        // 1.23456789 ETH
        let wei = U256::from(1_234_567_890_000_000_000u128);
        assert_eq!(format_balance(wei), "1.2345");
        assert_eq!(format_balance(U256::from(1_234_000u128 * ONE_ETHER)), "1,234,000.0000");
    }

    #[test]
    fn test_format_units_zero_decimals() {
        assert_eq!(format_units(U256::from(42u64), 0), "42");
        assert_eq!(format_units_fixed(U256::from(4200u64), 0, 0), "4,200");
    }

    #[test]
    fn test_parse_ether() {
        assert_eq!(parse_ether("1").unwrap(), U256::from(ONE_ETHER));
        assert_eq!(parse_ether(" 0.25 ").unwrap(), U256::from(ONE_ETHER / 4));
        assert!(parse_ether("-1").is_err());
        assert!(parse_ether("1.2.3").is_err());
        assert!(parse_ether("").is_err());
    }

    #[test]
    fn test_parse_token_units() {
        assert_eq!(parse_units("12.5", 6).unwrap(), U256::from(12_500_000u64));
    }

    #[test]
    fn test_parse_rejects_excess_precision() {
        assert!(parse_ether("1.0000000000000000009").is_err());
        assert!(parse_ether("0.0000000000000000001").is_err());
        assert!(parse_units("1.1234567", 6).is_err());
        // trailing zeros lose nothing
        assert_eq!(parse_units("1.5000000", 6).unwrap(), U256::from(1_500_000u64));
        assert_eq!(
            parse_ether("0.000000000000000001").unwrap(),
            U256::from(1u64)
        );
    }
}
