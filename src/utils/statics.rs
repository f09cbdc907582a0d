//! Constructors for `static` selectors and patterns.
//!
//! Both take a hard-coded source string, so a failure is a bug in this crate
//! rather than bad input; they panic with the name of the offending static.

use regex::Regex;
use scraper::Selector;

/// Parses a hard-coded CSS selector. Panics if it does not parse.
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

/// Compiles a hard-coded regex. Panics if it does not compile.
pub fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}
