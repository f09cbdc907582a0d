//! Logo and `sameAs` URL interpretation.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::classify::{is_url, repair_scheme};
use crate::config::LOGO_META_NAMES;
use crate::error_handling::{ExtractionStats, WarningType};
use crate::parse::{JsonLdRecord, MetaTag};

/// Networks recognized in `sameAs` cross references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileNetwork {
    Facebook,
    GitHub,
    Google,
    Instagram,
    LinkedIn,
    Pinterest,
    Twitter,
    Vimeo,
    YouTube,
}

/// Canonical profile URL per network.
pub type SameAsProfiles = BTreeMap<ProfileNetwork, String>;

const SAME_AS_DOMAINS: &[(ProfileNetwork, &str)] = &[
    (ProfileNetwork::Facebook, "facebook.com"),
    (ProfileNetwork::GitHub, "github.com"),
    (ProfileNetwork::Google, "google.com"),
    (ProfileNetwork::Instagram, "instagram.com"),
    (ProfileNetwork::LinkedIn, "linkedin.com"),
    (ProfileNetwork::Pinterest, "pinterest.com"),
    (ProfileNetwork::Twitter, "twitter.com"),
    (ProfileNetwork::Vimeo, "vimeo.com"),
    (ProfileNetwork::YouTube, "youtube.com"),
];

/// Collects logo URLs from JSON-LD `logo` strings and `og:image` meta tags.
///
/// Records come first, then meta tags; duplicates are dropped. Protocol-relative
/// candidates get an `https:` scheme, and anything that is still not a valid URL
/// is dropped with an `InvalidLogoUrl` warning.
pub fn extract_logos(
    records: &[JsonLdRecord],
    meta_tags: &[MetaTag],
    stats: &ExtractionStats,
) -> Vec<String> {
    let from_records = records
        .iter()
        .filter_map(|record| record.get("logo")?.as_str());
    let from_meta = meta_tags
        .iter()
        .filter(|tag| LOGO_META_NAMES.contains(&tag.name.as_str()))
        .map(|tag| tag.content.as_str());

    let mut logos: Vec<String> = Vec::new();
    for candidate in from_records.chain(from_meta) {
        let repaired = repair_scheme(candidate);
        if repaired.is_empty() {
            continue;
        }
        if !is_url(&repaired) {
            log::debug!("Dropping invalid logo URL: {repaired}");
            stats.increment_warning(WarningType::InvalidLogoUrl);
            continue;
        }
        if !logos.contains(&repaired) {
            logos.push(repaired);
        }
    }
    logos
}

/// Classifies `sameAs` URLs by network.
///
/// `sameAs` may be a single string or an array; non-string entries are
/// ignored. Matching is a literal substring test against each network's
/// domain. The last URL seen for a network wins, across entries and records.
pub fn extract_same_as(records: &[JsonLdRecord]) -> SameAsProfiles {
    let mut profiles = SameAsProfiles::new();

    let urls = records.iter().flat_map(|record| match record.get("sameAs") {
        Some(Value::String(url)) => vec![url.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    });

    for url in urls {
        let url = url.trim();
        if let Some((network, _)) = SAME_AS_DOMAINS
            .iter()
            .find(|(_, domain)| url.contains(domain))
        {
            profiles.insert(*network, url.to_string());
        }
    }
    profiles
}
