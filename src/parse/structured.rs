//! JSON-LD block extraction.
//!
//! Searches the document head for `<script type="application/ld+json">` tags and
//! parses their content. A block that fails to parse is skipped; it never aborts
//! extraction of the others.

use scraper::Html;
use serde_json::{Map, Value};
use std::sync::LazyLock;

use crate::error_handling::{ExtractionStats, WarningType};
use crate::utils::parse_selector_unsafe;

const HEAD_SCRIPT_SELECTOR_STR: &str = "head script[type]";
const JSON_LD_MIME: &str = "application/ld+json";

static HEAD_SCRIPT_SELECTOR: LazyLock<scraper::Selector> =
    LazyLock::new(|| parse_selector_unsafe(HEAD_SCRIPT_SELECTOR_STR, "HEAD_SCRIPT_SELECTOR"));

/// One parsed JSON-LD object.
pub type JsonLdRecord = Map<String, Value>;

/// Extracts JSON-LD records from the document head, in document order.
///
/// - The `type` attribute is compared case-insensitively, ignoring surrounding whitespace.
/// - A top-level array contributes each of its object elements as a record.
/// - Non-object values are ignored.
/// - Malformed blocks are logged at debug level and counted as `MalformedJsonLd`.
pub fn extract_json_ld(document: &Html, stats: &ExtractionStats) -> Vec<JsonLdRecord> {
    let mut records = Vec::new();

    for element in document.select(&HEAD_SCRIPT_SELECTOR) {
        let is_json_ld = element
            .value()
            .attr("type")
            .is_some_and(|t| t.trim().eq_ignore_ascii_case(JSON_LD_MIME));
        if !is_json_ld {
            continue;
        }

        let text = element.text().collect::<String>();
        match serde_json::from_str::<Value>(text.trim()) {
            Ok(Value::Object(record)) => records.push(record),
            Ok(Value::Array(items)) => {
                records.extend(items.into_iter().filter_map(|item| match item {
                    Value::Object(record) => Some(record),
                    _ => None,
                }));
            }
            Ok(other) => {
                log::debug!("Ignoring JSON-LD block that is not an object: {other}");
            }
            Err(e) => {
                log::debug!("Skipping malformed JSON-LD block: {e}");
                stats.increment_warning(WarningType::MalformedJsonLd);
            }
        }
    }

    records
}
