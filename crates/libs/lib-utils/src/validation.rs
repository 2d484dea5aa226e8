//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate maximum length.
pub fn validate_max_length(value: &str, max: usize, field_name: &str) -> Result<(), String> {
    if value.len() > max {
        Err(format!("{} must be at most {} characters", field_name, max))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("0xabc", "Recipient").is_ok());
        assert_eq!(
            validate_not_empty("   ", "Recipient"),
            Err("Recipient cannot be empty".to_string())
        );
    }

    #[test]
    fn test_validate_max_length() {
        assert!(validate_max_length("1.5", 10, "Amount").is_ok());
        assert!(validate_max_length("12345678901", 10, "Amount").is_err());
    }
}
