//! Input validation helpers
//!
//! Length limits for operator-entered text. Names appear on the printed
//! label, so they stay short.

use crate::utils::AppError;

/// Customer and manager names
pub const MAX_NAME_LEN: usize = 50;

/// Phone numbers, price text, base ids
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    validate_optional_text(value, field, max_len)
}

/// Validate that a possibly empty string is within the length limit.
pub fn validate_optional_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("김민지", "customer_name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "customer_name", MAX_NAME_LEN).is_err());
        let long = "가".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "customer_name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // 50 Hangul syllables are 150 bytes
        let name = "가".repeat(MAX_NAME_LEN);
        assert!(validate_optional_text(&name, "manager_name", MAX_NAME_LEN).is_ok());
    }
}
