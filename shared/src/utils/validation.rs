//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 \-]{6,18}[0-9]$").expect("valid phone regex"));

/// Check if a string is empty or whitespace only
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns the value only when it is present and not blank
///
/// Optional profile fields treat `None`, `""` and `"   "` the same way:
/// as "leave unchanged".
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !is_blank(v))
}

/// Check if an email address is well-formed
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check if a phone number is plausible (digits, optional leading `+`, spaces or dashes)
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("alice@example.com")), Some("alice@example.com"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));
        assert!(!is_valid_email("alice@"));
        assert!(!is_valid_email("alice.example.com"));
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("+84 912 345 678"));
        assert!(is_valid_phone("0912345678"));
        assert!(!is_valid_phone("12"));
        assert!(!is_valid_phone("phone"));
    }
}
