//! Masking of personal data before it reaches the logs

/// Mask the local part of an address, keeping the first character
///
/// `alice@example.com` becomes `a****@example.com`.
pub fn mask_email(address: &str) -> String {
    match address.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}****@{}", first, domain)
        }
        _ => "****".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a****@example.com");
        assert_eq!(mask_email("đức@example.vn"), "đ****@example.vn");
        assert_eq!(mask_email("@example.com"), "****");
        assert_eq!(mask_email("no-at-sign"), "****");
    }
}
