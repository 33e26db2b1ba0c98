//! Shape checks for email and url strings.
//!
//! Structural checks, not full RFC parsers: an email is a bounded local part
//! and a dotted domain around a single `@`; a url is an http(s) scheme and a
//! dotted authority.

/// Validates the local@domain shape of an email address.
pub(crate) fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };

    if local.is_empty() || local.len() > 64 {
        return false;
    }
    if !local
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | '+'))
    {
        return false;
    }

    is_valid_domain(domain)
}

/// Validates the scheme://authority shape of an http(s) url.
pub(crate) fn is_valid_url(url: &str) -> bool {
    let rest = match url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    {
        Some(rest) => rest,
        None => return false,
    };

    // authority runs to the first path/query/fragment delimiter
    let authority = rest
        .split(|c| matches!(c, '/' | '?' | '#'))
        .next()
        .unwrap_or_default();

    // strip an optional port
    let host = authority.split(':').next().unwrap_or_default();

    is_valid_domain(host)
}

fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > 255 {
        return false;
    }
    if !domain.contains('.') || domain.contains("..") {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') || domain.starts_with('-') || domain.ends_with('-')
    {
        return false;
    }
    if !domain.chars().all(|c| c.is_alphanumeric() || matches!(c, '.' | '-')) {
        return false;
    }
    // TLD of at least two characters
    match domain.rsplit('.').next() {
        Some(tld) => tld.len() >= 2,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("john.doe@example.com"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://test.co.uk"));
        assert!(is_valid_url("https://example.com/path?q=1#frag"));
        assert!(is_valid_url("https://example.com:8080/path"));
        assert!(is_valid_url("https://docs.rs"));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("https://nodots"));
        assert!(!is_valid_url("https://bad..dots.com"));
    }
}
