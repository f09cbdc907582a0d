//! HTML parsing and raw field extraction.
//!
//! This module pulls candidate values out of a parsed document:
//! - Page title
//! - Meta tags (name resolved from `itemprop`, `property` or `name`)
//! - JSON-LD blocks (application/ld+json)
//! - `mailto:` anchors
//! - Social profile page fields (Twitter profile layout)
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod html;
mod profile;
mod structured;

// Re-export public API
pub use html::{extract_mailto_addresses, extract_meta_tags, extract_title, MetaTag};
pub use profile::{extract_social_profile, ProfileField, SocialProfile};
pub use structured::{extract_json_ld, JsonLdRecord};
