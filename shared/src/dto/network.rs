//! # Network Labels
//!
//! Static chain id → display name table.

/// Networks the dashboard knows by name
pub const KNOWN_NETWORKS: &[(u64, &str)] = &[
    (1, "Ethereum Mainnet"),
    (11155111, "Sepolia Testnet"),
    (137, "Polygon"),
    (80001, "Mumbai Testnet"),
];

/// Human-readable label for a chain id; unknown ids render as `Chain ID: {id}`.
///
/// # Examples
///
/// ```rust
/// use shared::dto::network::network_label;
///
/// assert_eq!(network_label(1), "Ethereum Mainnet");
/// assert_eq!(network_label(42161), "Chain ID: 42161");
/// ```
pub fn network_label(chain_id: u64) -> String {
    KNOWN_NETWORKS
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| format!("Chain ID: {}", chain_id))
}

/// Parse a hex chain id such as `0xaa36a7`.
///
/// The `0x` prefix is optional and case-insensitive. Returns `None` for empty
/// or non-hex input.
pub fn parse_chain_id_hex(value: &str) -> Option<u64> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(network_label(1), "Ethereum Mainnet");
        assert_eq!(network_label(11155111), "Sepolia Testnet");
        assert_eq!(network_label(137), "Polygon");
        assert_eq!(network_label(80001), "Mumbai Testnet");
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(network_label(31337), "Chain ID: 31337");
    }

    #[test]
    fn test_parse_chain_id_hex() {
        assert_eq!(parse_chain_id_hex("0xaa36a7"), Some(11155111));
        assert_eq!(parse_chain_id_hex("0X89"), Some(137));
        assert_eq!(parse_chain_id_hex("1"), Some(1));
        assert_eq!(parse_chain_id_hex("0x"), None);
        assert_eq!(parse_chain_id_hex("sepolia"), None);
    }
}
