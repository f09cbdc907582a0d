//! Free-text and URL classification.
//!
//! This module decides what a whitespace-separated token is:
//! - a URL (syntax check only, underscores allowed in host labels)
//! - a social network profile link, and for which network
//! - an email address
//! - an `@handle` or a `#hashtag`
//!
//! All patterns are immutable `LazyLock<Regex>` values, so repeated matching
//! carries no state between calls.

mod entities;
mod social;
mod url_syntax;

// Re-export public API
pub use entities::{
    extract_handles, extract_hashtags, extract_related_entities, is_email, RelatedEntities,
};
pub use social::{classify_url, partition_urls, AccountLink, AccountType};
pub use url_syntax::{is_url, repair_scheme, text_to_urls};
