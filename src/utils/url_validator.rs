//! URL validation and normalization.
//!
//! Produces the canonical form under which original URLs are stored and
//! deduplicated. Pure; no I/O.

use url::Url;

/// Errors that can occur while validating a submitted URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Please enter a URL")]
    Empty,

    #[error("URL exceeds the maximum length of {0} characters")]
    TooLong(usize),

    #[error("Only http, https, and ftp URLs are allowed")]
    UnsupportedScheme,

    #[error("Please enter a valid URL")]
    Invalid,
}

/// Validates a raw user-supplied string and normalizes it to an absolute URL.
///
/// # Rules
///
/// 1. Empty input (after trimming) is rejected.
/// 2. Input longer than `max_length` is rejected.
/// 3. Input that parses with a scheme and host is accepted only for
///    `http`, `https`, and `ftp`.
/// 4. Input without a scheme that contains a `.` is retried with an
///    `https://` prefix and accepted if the resulting host is non-empty,
///    contains a `.`, and does not start or end with one.
///
/// The returned string is the canonical serialization of the parsed URL,
/// which is the form stored and used for deduplication.
///
/// # Errors
///
/// Returns a [`UrlValidationError`] describing the first rule violated.
pub fn normalize_url(raw: &str, max_length: usize) -> Result<String, UrlValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }
    if trimmed.len() > max_length {
        return Err(UrlValidationError::TooLong(max_length));
    }

    match Url::parse(trimmed) {
        Ok(url) if url.has_host() => match url.scheme() {
            "http" | "https" | "ftp" => Ok(url.to_string()),
            _ => Err(UrlValidationError::UnsupportedScheme),
        },
        // Parsed, but to a host-less URL (mailto:, data:, bogus scheme).
        Ok(_) => Err(UrlValidationError::Invalid),
        // No scheme at all: try a bare domain.
        Err(_) => normalize_bare_domain(trimmed),
    }
}

/// Attempts to interpret scheme-less input as a bare domain by prefixing
/// `https://`.
fn normalize_bare_domain(input: &str) -> Result<String, UrlValidationError> {
    if !input.contains('.') {
        return Err(UrlValidationError::Invalid);
    }

    let prefixed = format!("https://{input}");
    let url = Url::parse(&prefixed).map_err(|_| UrlValidationError::Invalid)?;

    match url.host_str() {
        Some(host)
            if !host.is_empty()
                && host.contains('.')
                && !host.starts_with('.')
                && !host.ends_with('.') =>
        {
            Ok(url.to_string())
        }
        _ => Err(UrlValidationError::Invalid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 2048;

    #[test]
    fn test_accepts_http_and_https() {
        assert_eq!(
            normalize_url("https://example.com", MAX).unwrap(),
            "https://example.com/"
        );
        assert_eq!(
            normalize_url("http://example.com", MAX).unwrap(),
            "http://example.com/"
        );
    }

    #[test]
    fn test_accepts_ftp() {
        assert_eq!(
            normalize_url("ftp://example.com/file.txt", MAX).unwrap(),
            "ftp://example.com/file.txt"
        );
    }

    #[test]
    fn test_accepts_path_and_query() {
        assert_eq!(
            normalize_url("https://www.example.com/path?param=value", MAX).unwrap(),
            "https://www.example.com/path?param=value"
        );
    }

    #[test]
    fn test_bare_domain_gets_https_prefix() {
        assert_eq!(
            normalize_url("example.com", MAX).unwrap(),
            "https://example.com/"
        );
        assert_eq!(
            normalize_url("www.example.com/page", MAX).unwrap(),
            "https://www.example.com/page"
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            normalize_url("", MAX),
            Err(UrlValidationError::Empty)
        ));
        assert!(matches!(
            normalize_url("   ", MAX),
            Err(UrlValidationError::Empty)
        ));
    }

    #[test]
    fn test_rejects_too_long() {
        let long = format!("https://example.com/{}", "a".repeat(3000));
        assert!(matches!(
            normalize_url(&long, MAX),
            Err(UrlValidationError::TooLong(2048))
        ));
    }

    #[test]
    fn test_rejects_no_scheme_no_dot() {
        assert!(matches!(
            normalize_url("not-a-url", MAX),
            Err(UrlValidationError::Invalid)
        ));
        assert!(matches!(
            normalize_url("localhost", MAX),
            Err(UrlValidationError::Invalid)
        ));
    }

    #[test]
    fn test_rejects_unsupported_schemes() {
        assert!(matches!(
            normalize_url("javascript://example.com/alert(1)", MAX),
            Err(UrlValidationError::UnsupportedScheme)
        ));
        assert!(matches!(
            normalize_url("file://example.com/etc/passwd", MAX),
            Err(UrlValidationError::UnsupportedScheme)
        ));
    }

    #[test]
    fn test_rejects_host_less_uris() {
        assert!(normalize_url("mailto:test@example.com", MAX).is_err());
        assert!(normalize_url("data:text/plain,Hello", MAX).is_err());
    }

    #[test]
    fn test_rejects_dot_edged_hosts() {
        assert!(normalize_url(".example.com", MAX).is_err());
        assert!(normalize_url("example.com.", MAX).is_err());
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(
            normalize_url("  https://example.com  ", MAX).unwrap(),
            "https://example.com/"
        );
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = normalize_url("example.com", MAX).unwrap();
        let twice = normalize_url(&once, MAX).unwrap();
        assert_eq!(once, twice);
    }
}
