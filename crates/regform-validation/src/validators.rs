// File: src/validators.rs
// Purpose: Per-field validation rules (pure functions, no side effects)

use once_cell::sync::Lazy;
use regex::Regex;

use crate::result::ValidationResult;

/// Minimum trimmed length for the name field
pub const NAME_MIN_LEN: usize = 3;
/// Maximum trimmed length for the name field
pub const NAME_MAX_LEN: usize = 50;
/// Minimum length for the password field
pub const PASSWORD_MIN_LEN: usize = 8;

// Syntactic approximation only (something@something.something, no
// whitespace or extra '@'), not RFC-compliant email validation.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validate the name field
///
/// Trims surrounding whitespace, then requires a length between
/// `NAME_MIN_LEN` and `NAME_MAX_LEN` characters.
pub fn validate_name(value: &str) -> ValidationResult {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return ValidationResult::fail("Name is required");
    }

    let len = trimmed.chars().count();
    if len < NAME_MIN_LEN {
        return ValidationResult::fail(format!(
            "Name must be at least {} characters",
            NAME_MIN_LEN
        ));
    }
    if len > NAME_MAX_LEN {
        return ValidationResult::fail(format!(
            "Name must be at most {} characters",
            NAME_MAX_LEN
        ));
    }

    ValidationResult::ok()
}

/// Validate the email field against the anchored pattern
pub fn validate_email(value: &str) -> ValidationResult {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return ValidationResult::fail("Email is required");
    }
    if !EMAIL_REGEX.is_match(trimmed) {
        return ValidationResult::fail("Please enter a valid email address");
    }

    ValidationResult::ok()
}

/// Validate the password field
///
/// No trimming: leading and trailing whitespace is significant in a password.
pub fn validate_password(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail("Password is required");
    }
    if value.chars().count() < PASSWORD_MIN_LEN {
        return ValidationResult::fail(format!(
            "Password must be at least {} characters",
            PASSWORD_MIN_LEN
        ));
    }

    ValidationResult::ok()
}

/// Validate the confirm-password field against the current password
///
/// Comparison is exact and case-sensitive.
pub fn validate_confirm_password(password: &str, confirm: &str) -> ValidationResult {
    if confirm.is_empty() {
        return ValidationResult::fail("Please confirm your password");
    }
    if confirm != password {
        return ValidationResult::fail("Passwords do not match");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        assert_eq!(validate_name("").message, "Name is required");
        assert_eq!(validate_name("   ").message, "Name is required");
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(!validate_name("ab").valid);
        assert!(validate_name("abc").valid);
        assert!(validate_name(&"x".repeat(50)).valid);
        assert!(!validate_name(&"x".repeat(51)).valid);
    }

    #[test]
    fn test_name_trims_before_measuring() {
        // Two characters surrounded by whitespace is still too short
        assert!(!validate_name("  ab  ").valid);
        assert!(validate_name("  abc  ").valid);
        // Padding cannot push a 50-character name over the limit
        let padded = format!("  {}  ", "x".repeat(50));
        assert!(validate_name(&padded).valid);
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        // Three multibyte characters are within bounds
        assert!(validate_name("äöü").valid);
    }

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("user@example.com").valid);
        assert!(validate_email("user+tag@example.co.uk").valid);
        assert!(validate_email("USER@EXAMPLE.COM").valid);
        assert!(validate_email("  user@example.com  ").valid);
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email("").message, "Email is required");
        assert_eq!(validate_email("   ").message, "Email is required");
        assert!(!validate_email("not-an-email").valid);
        assert!(!validate_email("user@example").valid);
        assert!(!validate_email("user@@example.com").valid);
        assert!(!validate_email("user @example.com").valid);
        assert!(!validate_email("@example.com").valid);
        assert!(!validate_email("user@.").valid);
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(validate_password("").message, "Password is required");
        assert!(!validate_password("short").valid);
        assert!(!validate_password("1234567").valid);
        assert!(validate_password("longenough1").valid);
        assert!(validate_password("12345678").valid);
    }

    #[test]
    fn test_password_is_not_trimmed() {
        // Eight characters of whitespace is a legal password
        assert!(validate_password("        ").valid);
    }

    #[test]
    fn test_confirm_password() {
        assert_eq!(
            validate_confirm_password("abc12345", "").message,
            "Please confirm your password"
        );
        assert_eq!(
            validate_confirm_password("abc12345", "different").message,
            "Passwords do not match"
        );
        // Case-sensitive comparison
        assert!(!validate_confirm_password("abc12345", "ABC12345").valid);
        assert!(validate_confirm_password("abc12345", "abc12345").valid);
    }

    #[test]
    fn test_confirm_required_takes_precedence_over_mismatch() {
        // Empty confirm reports Required even though it also differs
        let result = validate_confirm_password("abc12345", "");
        assert_eq!(result.message, "Please confirm your password");
    }
}
