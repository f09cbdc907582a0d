//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, size limits, and the meta tag names each aggregate reads.

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("profile_extract/", env!("CARGO_PKG_VERSION"));

/// Per-request HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// URL validation
/// Maximum length of the target URL given on the command line.
pub const MAX_URL_LENGTH: usize = 2048;
/// Maximum length of a free-text token that may still be classified as a URL.
pub const MAX_TOKEN_URL_LENGTH: usize = 2083;
/// Schemes a free-text URL token may carry.
pub const URL_TOKEN_SCHEMES: &[&str] = &["http", "https", "ftp"];

// Retry strategy
/// Fixed delay in milliseconds before the single retry of a failed fetch
pub const RETRY_DELAY_MS: u64 = 500;
/// Number of retries after the first attempt
pub const RETRY_MAX_RETRIES: usize = 1;

/// HTTP status code for Too Many Requests (rate limiting)
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;

// Meta tag preference lists (order matters: results follow list order)
/// Meta tag names whose content is treated as a page title.
pub const TITLE_META_NAMES: &[&str] = &["og:site_name", "og:title", "twitter:title"];
/// Meta tag names whose content is treated as a page description.
pub const DESCRIPTION_META_NAMES: &[&str] = &[
    "description",
    "og:description",
    "twitter:description",
    "keywords",
];
/// Meta tag names whose content is a logo/image candidate.
pub const LOGO_META_NAMES: &[&str] = &["og:image"];

/// Placeholder names left behind by site builders. Compared case-insensitively
/// against whole candidate names.
pub const COMPANY_NAME_BLOCKLIST: &[&str] = &[
    "your site title",
    "home",
    "squarespace",
    "wordpress",
    "shopify",
];

/// Maximum number of redirect hops to follow when fetching the target page
pub const MAX_REDIRECT_HOPS: usize = 10;
