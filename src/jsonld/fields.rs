//! String field projections over JSON-LD records.

use crate::parse::JsonLdRecord;

/// Projects one key over all records.
///
/// Yields one trimmed entry per record whose value under `key` is a string, in
/// record order. Records where the key is absent or not a string contribute
/// nothing.
pub fn string_field(records: &[JsonLdRecord], key: &str) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.get(key)?.as_str())
        .map(|value| value.trim().to_string())
        .collect()
}

pub fn descriptions(records: &[JsonLdRecord]) -> Vec<String> {
    string_field(records, "description")
}

/// `@type` values; used as a supplementary description/category signal.
pub fn types(records: &[JsonLdRecord]) -> Vec<String> {
    string_field(records, "@type")
}

pub fn legal_names(records: &[JsonLdRecord]) -> Vec<String> {
    string_field(records, "legalName")
}

pub fn names(records: &[JsonLdRecord]) -> Vec<String> {
    string_field(records, "name")
}

pub fn alternate_names(records: &[JsonLdRecord]) -> Vec<String> {
    string_field(records, "alternateName")
}

pub fn telephones(records: &[JsonLdRecord]) -> Vec<String> {
    string_field(records, "telephone")
}
