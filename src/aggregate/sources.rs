//! Title and description precedence.

use crate::config::{DESCRIPTION_META_NAMES, TITLE_META_NAMES};
use crate::jsonld;
use crate::parse::{JsonLdRecord, MetaTag};

/// Meta contents for a preference list of names.
///
/// Ordered by the list first, then by document order within one name. Names
/// must match exactly; contents are returned as written, empty ones skipped.
fn meta_contents(meta_tags: &[MetaTag], names: &[&str]) -> Vec<String> {
    names
        .iter()
        .flat_map(move |name| {
            meta_tags
                .iter()
                .filter(move |tag| tag.name == *name && !tag.content.is_empty())
                .map(|tag| tag.content.clone())
        })
        .collect()
}

/// Page titles: the `<title>` text, then the title-like meta tags.
///
/// The `<title>` text always comes first, even when empty.
pub fn titles(title: &str, meta_tags: &[MetaTag]) -> Vec<String> {
    std::iter::once(title.to_string())
        .chain(meta_contents(meta_tags, TITLE_META_NAMES))
        .collect()
}

/// Page descriptions: JSON-LD `description`s, then JSON-LD `@type`s, then the
/// description-like meta tags. Not deduplicated across sources.
pub fn descriptions(records: &[JsonLdRecord], meta_tags: &[MetaTag]) -> Vec<String> {
    jsonld::descriptions(records)
        .into_iter()
        .chain(jsonld::types(records))
        .filter(|value| !value.is_empty())
        .chain(meta_contents(meta_tags, DESCRIPTION_META_NAMES))
        .collect()
}
