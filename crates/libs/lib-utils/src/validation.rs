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

/// Validate that a string is non-empty, even-length hex (an optional `0x` prefix is allowed).
pub fn validate_hex(value: &str, field_name: &str) -> Result<(), String> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }
    if digits.len() % 2 != 0 {
        return Err(format!("{} must have an even number of hex digits", field_name));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("{} contains non-hex characters", field_name));
    }
    Ok(())
}
