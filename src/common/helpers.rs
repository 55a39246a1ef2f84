// Helper functions for safe logging of contact details

/// Masks email addresses for safe logging
///
/// # Example
/// ```
/// use zakat_maal::common::safe_email_log;
/// assert_eq!(safe_email_log("fulanah@example.com"), "f***@example.com");
/// ```
pub fn safe_email_log(email: &str) -> String {
    let parts: Vec<&str> = email.trim().split('@').collect();
    match parts.as_slice() {
        [local, domain] if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***@***.***".to_string(),
    }
}

/// Masks phone numbers for safe logging
/// Keeps the country code and the last two digits
///
/// # Example
/// ```
/// use zakat_maal::common::safe_phone_log;
/// assert_eq!(safe_phone_log("628123456789"), "62********89");
/// ```
pub fn safe_phone_log(phone: &str) -> String {
    let chars: Vec<char> = phone.trim().chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len().max(3));
    }

    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 4), tail)
}
