//! URL syntax validation for free-text tokens.

use url::{Host, Url};

use crate::config::{MAX_TOKEN_URL_LENGTH, URL_TOKEN_SCHEMES};

/// Parses a token that may lack a scheme.
///
/// Tokens without `://` are parsed as if prefixed by `http://`. Protocol-relative
/// tokens (`//host`) are not accepted here; see `repair_scheme`.
pub(crate) fn parse_loose(token: &str) -> Option<Url> {
    if token.contains("://") {
        Url::parse(token).ok()
    } else if token.starts_with("//") {
        None
    } else {
        Url::parse(&format!("http://{token}")).ok()
    }
}

/// Checks whether a token is a syntactically valid URL.
///
/// No network access or DNS resolution is involved. A token is a URL when:
/// - it is non-empty, at most `MAX_TOKEN_URL_LENGTH` characters, and has no whitespace
/// - it is neither a `mailto:` link nor an email address
/// - its scheme, if given, is one of `URL_TOKEN_SCHEMES`
/// - its host is an IP address, or a domain with a top-level label (see `is_valid_domain`)
///
/// # Examples
///
/// ```
/// use profile_extract::classify::is_url;
///
/// assert!(is_url("zach.dev"));
/// assert!(is_url("https://github.com/zach"));
/// assert!(is_url("my_site.example.com"));
/// assert!(!is_url("@sarasanchezgt"));
/// assert!(!is_url("hello@gmail.com"));
/// ```
pub fn is_url(token: &str) -> bool {
    if token.is_empty()
        || token.len() > MAX_TOKEN_URL_LENGTH
        || token.chars().any(char::is_whitespace)
        || token.to_ascii_lowercase().starts_with("mailto:")
        || super::entities::is_email(token)
    {
        return false;
    }

    let Some(parsed) = parse_loose(token) else {
        return false;
    };

    if !URL_TOKEN_SCHEMES.contains(&parsed.scheme()) {
        return false;
    }

    match parsed.host() {
        Some(Host::Domain(domain)) => is_valid_domain(domain),
        // The WHATWG parser turns bare numbers ("123") into IPv4 hosts;
        // only a literal dotted quad in the token counts as an IP.
        Some(Host::Ipv4(ip)) => token.contains(&ip.to_string()),
        Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

/// Checks the labels of an (already lowercased, punycoded) domain.
///
/// Labels are 1-63 characters of ASCII alphanumerics, `-` and `_`, and do not
/// start or end with `-`. The last label is alphabetic with at least two
/// characters, or a punycode `xn--` label. One trailing dot is tolerated.
fn is_valid_domain(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    });
    if !labels_ok {
        return false;
    }

    let tld = labels[labels.len() - 1];
    tld.starts_with("xn--") || (tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}

/// Splits free text on whitespace and keeps the tokens that are URLs, in text order.
pub fn text_to_urls(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(str::trim)
        .filter(|token| is_url(token))
        .map(str::to_string)
        .collect()
}

/// Gives protocol-relative URLs (`//cdn.example.com/logo.png`) an `https:` scheme.
///
/// Any other input is returned trimmed and otherwise unchanged.
pub fn repair_scheme(candidate: &str) -> String {
    let candidate = candidate.trim();
    if candidate.starts_with("//") {
        format!("https:{candidate}")
    } else {
        candidate.to_string()
    }
}
