//! Target URL validation.

use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::InputError;

/// Validates the target URL.
///
/// The URL must be present, at most `MAX_URL_LENGTH` characters, carry an
/// explicit `http://` or `https://` scheme, parse, and name a host. Unlike free
/// text tokens, a target without a scheme is rejected rather than completed.
///
/// # Errors
///
/// Returns the matching `InputError`; callers must not fetch anything then.
pub fn validate_target_url(url: Option<&str>) -> Result<Url, InputError> {
    let url = url.map(str::trim).unwrap_or_default();
    if url.is_empty() {
        return Err(InputError::MissingUrl);
    }

    if url.len() > MAX_URL_LENGTH {
        log::warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            url.chars().take(50).collect::<String>()
        );
        return Err(InputError::TooLong(url.len()));
    }

    if !url.contains("://") {
        return Err(InputError::MissingScheme(url.to_string()));
    }

    let parsed = Url::parse(url).map_err(|e| InputError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(InputError::UnsupportedScheme {
                url: url.to_string(),
                scheme: scheme.to_string(),
            })
        }
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(InputError::InvalidUrl {
            url: url.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_target_url_accepts_http_and_https() {
        let url = validate_target_url(Some("https://example.com/about")).unwrap();
        assert_eq!(url.as_str(), "https://example.com/about");

        let url = validate_target_url(Some("http://example.com")).unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_validate_target_url_trims_whitespace() {
        let url = validate_target_url(Some("  https://example.com  ")).unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_validate_target_url_missing() {
        assert_eq!(validate_target_url(None), Err(InputError::MissingUrl));
        assert_eq!(validate_target_url(Some("")), Err(InputError::MissingUrl));
        assert_eq!(validate_target_url(Some("   ")), Err(InputError::MissingUrl));
    }

    #[test]
    fn test_validate_target_url_requires_scheme() {
        assert_eq!(
            validate_target_url(Some("example.com")),
            Err(InputError::MissingScheme("example.com".to_string()))
        );
        assert_eq!(
            validate_target_url(Some("www.example.com/path")),
            Err(InputError::MissingScheme("www.example.com/path".to_string()))
        );
    }

    #[test]
    fn test_validate_target_url_rejects_unsupported_scheme() {
        assert_eq!(
            validate_target_url(Some("ftp://example.com")),
            Err(InputError::UnsupportedScheme {
                url: "ftp://example.com".to_string(),
                scheme: "ftp".to_string(),
            })
        );
        assert!(matches!(
            validate_target_url(Some("file:///etc/passwd")),
            Err(InputError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn test_validate_target_url_rejects_unparseable() {
        assert!(matches!(
            validate_target_url(Some("http://")),
            Err(InputError::InvalidUrl { .. })
        ));
        assert!(matches!(
            validate_target_url(Some("https://exa mple.com")),
            Err(InputError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_validate_target_url_ipv6() {
        let url = validate_target_url(Some("http://[2001:db8::1]:8080/path")).unwrap();
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn test_validate_target_url_length_limit() {
        // "https://example.com/" is 20 chars
        let at_limit = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH - 20));
        assert_eq!(at_limit.len(), MAX_URL_LENGTH);
        assert!(validate_target_url(Some(&at_limit)).is_ok());

        let too_long = format!("{at_limit}a");
        assert_eq!(
            validate_target_url(Some(&too_long)),
            Err(InputError::TooLong(MAX_URL_LENGTH + 1))
        );
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_scheme_less_domains_are_rejected(domain in "[a-z]{3,20}\\.[a-z]{2,5}") {
            prop_assert_eq!(
                validate_target_url(Some(&domain)),
                Err(InputError::MissingScheme(domain.clone()))
            );
        }

        #[test]
        fn test_https_domains_are_accepted(
            domain in "[a-z]{3,20}\\.[a-z]{2,5}",
            path in prop::collection::vec("[a-z]{1,10}", 0..20)
        ) {
            let url = format!("https://{}/{}", domain, path.join("/"));
            let parsed = validate_target_url(Some(&url));
            prop_assert!(parsed.is_ok());
            let parsed = parsed.unwrap();
            prop_assert_eq!(parsed.host_str(), Some(domain.as_str()));
        }

        #[test]
        fn test_arbitrary_input_never_panics(input in "\\PC{0,200}") {
            let _ = validate_target_url(Some(&input));
        }
    }
}
