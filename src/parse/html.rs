//! Basic HTML extraction utilities.
//!
//! This module provides functions to extract basic HTML elements:
//! - Page title
//! - Meta tags from the document head
//! - Email addresses behind `mailto:` anchors

use scraper::Html;
use serde::Serialize;
use std::sync::LazyLock;

use crate::error_handling::{ExtractionStats, WarningType};
use crate::utils::parse_selector_unsafe;

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const HEAD_META_SELECTOR_STR: &str = "head meta";
const MAILTO_SELECTOR_STR: &str = r#"a[href*="mailto:"]"#;

static TITLE_SELECTOR: LazyLock<scraper::Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static HEAD_META_SELECTOR: LazyLock<scraper::Selector> =
    LazyLock::new(|| parse_selector_unsafe(HEAD_META_SELECTOR_STR, "HEAD_META_SELECTOR"));
static MAILTO_SELECTOR: LazyLock<scraper::Selector> =
    LazyLock::new(|| parse_selector_unsafe(MAILTO_SELECTOR_STR, "MAILTO_SELECTOR"));

/// Attributes a meta tag name may come from, in priority order.
const META_NAME_ATTRIBUTES: [&str; 3] = ["itemprop", "property", "name"];

/// A head `<meta>` tag reduced to its resolved name and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

/// Extracts the page title from an HTML document.
///
/// Returns the text of the first `<title>` element, trimmed of whitespace. If
/// there is no title, or it is empty, records a `MissingTitle` warning and
/// returns an empty string.
pub fn extract_title(document: &Html, stats: &ExtractionStats) -> String {
    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    if title.is_empty() {
        log::debug!("No title text found in document");
        stats.increment_warning(WarningType::MissingTitle);
    }
    title
}

/// Extracts the meta tags of the document head.
///
/// The name of each tag is the first non-empty value among its `itemprop`,
/// `property` and `name` attributes. Tags with none of them (charset,
/// http-equiv, viewport-less junk) are skipped. A missing `content` attribute
/// yields an empty content string.
pub fn extract_meta_tags(document: &Html) -> Vec<MetaTag> {
    document
        .select(&HEAD_META_SELECTOR)
        .filter_map(|element| {
            let attrs = element.value();
            let name = META_NAME_ATTRIBUTES
                .iter()
                .filter_map(|attr| attrs.attr(attr))
                .map(str::trim)
                .find(|value| !value.is_empty())?;
            Some(MetaTag {
                name: name.to_string(),
                content: attrs.attr("content").unwrap_or_default().to_string(),
            })
        })
        .collect()
}

/// Extracts email addresses from `mailto:` anchors, in document order.
///
/// Everything up to and including `mailto:` is stripped, as is any query part
/// (`?subject=...`). Empty results are dropped.
pub fn extract_mailto_addresses(document: &Html) -> Vec<String> {
    document
        .select(&MAILTO_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| {
            let (_, address) = href.split_once("mailto:")?;
            let address = address.split('?').next().unwrap_or_default().trim();
            (!address.is_empty()).then(|| address.to_string())
        })
        .collect()
}
