//! Company site aggregation.

use scraper::Html;
use serde::Serialize;

use super::sources::{descriptions, titles};
use crate::classify::is_email;
use crate::config::COMPANY_NAME_BLOCKLIST;
use crate::error_handling::ExtractionStats;
use crate::jsonld::{self, Address, SameAsProfiles};
use crate::parse::{
    extract_json_ld, extract_mailto_addresses, extract_meta_tags, extract_title, JsonLdRecord,
};
use crate::utils::non_empty_trimmed;

/// Everything extracted from a company site's page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResult {
    pub titles: Vec<String>,
    pub descriptions: Vec<String>,
    /// Candidate company names, most likely first
    pub names: Vec<String>,
    pub emails: Vec<String>,
    pub telephones: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub logos: Vec<String>,
    pub social_profiles: SameAsProfiles,
}

fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}

fn is_placeholder_name(name: &str) -> bool {
    COMPANY_NAME_BLOCKLIST
        .iter()
        .any(|blocked| blocked.eq_ignore_ascii_case(name))
}

/// Candidate names: titles, then JSON-LD `legalName`, `name` and
/// `alternateName`. Site-builder placeholders and repeats are dropped.
fn company_names(titles: &[String], records: &[JsonLdRecord]) -> Vec<String> {
    let candidates = titles
        .iter()
        .cloned()
        .chain(jsonld::legal_names(records))
        .chain(jsonld::names(records))
        .chain(jsonld::alternate_names(records));

    let mut names = Vec::new();
    for candidate in candidates {
        let Some(name) = non_empty_trimmed(&candidate) else {
            continue;
        };
        if is_placeholder_name(&name) {
            log::debug!("Skipping placeholder company name: {name}");
            continue;
        }
        push_unique(&mut names, name);
    }
    names
}

/// Analyzes a company site's page.
pub fn analyze_company(html: &str) -> CompanyResult {
    let document = Html::parse_document(html);
    let stats = ExtractionStats::new();

    let title = extract_title(&document, &stats);
    let meta_tags = extract_meta_tags(&document);
    let records = extract_json_ld(&document, &stats);

    let titles = titles(&title, &meta_tags);
    let names = company_names(&titles, &records);

    let mut emails = Vec::new();
    for address in extract_mailto_addresses(&document) {
        if is_email(&address) {
            push_unique(&mut emails, address);
        } else {
            log::debug!("Skipping mailto address that is not an email: {address}");
        }
    }

    let telephones = jsonld::telephones(&records)
        .into_iter()
        .filter(|phone| !phone.is_empty())
        .collect();

    let result = CompanyResult {
        descriptions: descriptions(&records, &meta_tags),
        address: jsonld::extract_address(&records),
        logos: jsonld::extract_logos(&records, &meta_tags, &stats),
        social_profiles: jsonld::extract_same_as(&records),
        titles,
        names,
        emails,
        telephones,
    };

    log::debug!(
        "Company page: {} meta tag(s), {} JSON-LD record(s)",
        meta_tags.len(),
        records.len()
    );
    stats.log_summary();
    result
}
