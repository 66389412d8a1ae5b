// Helper functions for safe logging

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// let masked = safe_email_log("user@example.com");
/// // Returns: "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 {
            // Take the first char, not the first byte: local parts may start
            // with multibyte UTF-8 and a byte slice would panic mid-char
            match parts[0].chars().next() {
                Some(first) => format!("{}***@{}", first, parts[1]),
                None => "***@***.***".to_string(),
            }
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_email_log_masks_local_part() {
        assert_eq!(safe_email_log("user@example.com"), "u***@example.com");
    }

    #[test]
    fn test_safe_email_log_handles_garbage() {
        assert_eq!(safe_email_log("no-at-sign"), "***@***.***");
        assert_eq!(safe_email_log(""), "***@***.***");
        assert_eq!(safe_email_log("@example.com"), "***@***.***");
    }

    #[test]
    fn test_safe_email_log_handles_multibyte_first_char() {
        assert_eq!(safe_email_log("émile@example.com"), "é***@example.com");
        assert_eq!(safe_email_log("例え@example.jp"), "例***@example.jp");
    }
}
