//! Redaction of customer e-mail addresses
//!
//! Addresses must never land in log output verbatim. `mask_email` keeps
//! just enough of an address to tell records apart in a log line.

/// Mask the local part of an e-mail address, keeping its first character
/// and the domain: `alice@example.com` becomes `a***@example.com`.
///
/// Strings without an `@` are masked completely.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_keeps_first_char_and_domain() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("bob@example.com"), "b***@example.com");
    }

    #[test]
    fn test_mask_never_leaks_local_part() {
        let masked = mask_email("carol.jones@example.com");
        assert!(!masked.contains("carol"));
        assert!(!masked.contains("jones"));
    }

    #[test]
    fn test_mask_degenerate_inputs() {
        assert_eq!(mask_email("@example.com"), "***@example.com");
        assert_eq!(mask_email("not-an-address"), "***");
        assert_eq!(mask_email(""), "***");
    }
}
