//! Social profile page aggregation.

use scraper::Html;
use serde::Serialize;

use super::sources::{descriptions, titles};
use crate::classify::{
    extract_related_entities, partition_urls, text_to_urls, AccountLink, RelatedEntities,
};
use crate::error_handling::ExtractionStats;
use crate::parse::{
    extract_json_ld, extract_meta_tags, extract_social_profile, extract_title, SocialProfile,
};

/// Everything extracted from a social profile page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResult {
    pub titles: Vec<String>,
    pub descriptions: Vec<String>,
    pub social_profile: SocialProfile,
    /// Bio URLs that belong to no known network
    pub associated_websites: Vec<AccountLink>,
    /// Bio URLs of known networks, grouped by network
    pub associated_accounts: Vec<AccountLink>,
    pub related_entities: RelatedEntities,
}

/// Analyzes a social profile page.
///
/// The bio drives the link and entity fields: its URL tokens are split into
/// network accounts and plain websites, and its handles and hashtags become
/// the related entities.
pub fn analyze_social(html: &str) -> ProfileResult {
    let document = Html::parse_document(html);
    let stats = ExtractionStats::new();

    let title = extract_title(&document, &stats);
    let meta_tags = extract_meta_tags(&document);
    let records = extract_json_ld(&document, &stats);
    let social_profile = extract_social_profile(&document, &stats);

    let bio_urls = text_to_urls(&social_profile.bio);
    let (associated_accounts, associated_websites) = partition_urls(&bio_urls);
    let related_entities = extract_related_entities(&social_profile.bio);

    log::debug!(
        "Profile page: {} meta tag(s), {} JSON-LD record(s), {} bio URL(s)",
        meta_tags.len(),
        records.len(),
        bio_urls.len()
    );
    stats.log_summary();

    ProfileResult {
        titles: titles(&title, &meta_tags),
        descriptions: descriptions(&records, &meta_tags),
        social_profile,
        associated_websites,
        associated_accounts,
        related_entities,
    }
}
