//! Handle, hashtag and email recognition in free text.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::utils::compile_regex_unsafe;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}$";
const HANDLE_PATTERN: &str = r"@[A-Za-z0-9_]+";
const HASHTAG_PATTERN: &str = r"#[A-Za-z0-9]*";

/// Sentence punctuation that may trail an email address in running text.
const TRAILING_PUNCTUATION: &[char] = &[',', '.', ';', ':', '!', '?', ')'];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(EMAIL_PATTERN, "EMAIL_RE"));
static HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(HANDLE_PATTERN, "HANDLE_RE"));
static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(HASHTAG_PATTERN, "HASHTAG_RE"));

/// Handles and hashtags mentioned in a block of free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelatedEntities {
    pub accounts: Vec<String>,
    pub hashtags: Vec<String>,
}

/// Checks a token against standard email syntax.
pub fn is_email(token: &str) -> bool {
    token.len() <= 254 && EMAIL_RE.is_match(token)
}

/// Extracts `@handle` mentions in text order.
///
/// A token that is an email address contributes nothing, even when it carries
/// a leading `@` or trailing sentence punctuation. An `@` glued to a preceding
/// word character (`name@host`) is not a handle either.
pub fn extract_handles(text: &str) -> Vec<String> {
    let mut handles = Vec::new();
    for token in text.split_whitespace() {
        let candidate = token.trim_end_matches(TRAILING_PUNCTUATION);
        if is_email(candidate) || is_email(candidate.trim_start_matches('@')) {
            continue;
        }
        for found in HANDLE_RE.find_iter(token) {
            let glued = token[..found.start()]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');
            if !glued {
                handles.push(found.as_str().to_string());
            }
        }
    }
    handles
}

/// Extracts `#hashtag` mentions in text order. A bare `#` counts as a hashtag.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Collects handles and hashtags from free text.
///
/// Missing matches yield empty lists, never an absent value.
pub fn extract_related_entities(text: &str) -> RelatedEntities {
    RelatedEntities {
        accounts: extract_handles(text),
        hashtags: extract_hashtags(text),
    }
}
