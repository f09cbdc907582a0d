// Utils module tests.

use super::*;

#[test]
fn test_parse_selector_unsafe_valid() {
    let selector = parse_selector_unsafe("head meta[property]", "test");
    let document = scraper::Html::parse_document(
        r#"<html><head><meta property="og:title" content="x"></head></html>"#,
    );
    assert_eq!(document.select(&selector).count(), 1);
}

#[test]
#[should_panic(expected = "This is a programming error")]
fn test_parse_selector_unsafe_invalid_panics() {
    parse_selector_unsafe("meta[", "test");
}

#[test]
fn test_compile_regex_unsafe_valid() {
    let re = compile_regex_unsafe(r"^@[a-z]+$", "test");
    assert!(re.is_match("@zach"));
}

#[test]
#[should_panic(expected = "This is a programming error")]
fn test_compile_regex_unsafe_invalid_panics() {
    compile_regex_unsafe("(unclosed", "test");
}

#[test]
fn test_collapse_whitespace() {
    assert_eq!(
        collapse_whitespace("  123 Main St\n\n   Suite 4\t"),
        "123 Main St Suite 4"
    );
    assert_eq!(collapse_whitespace(" \n\t "), "");
}

#[test]
fn test_non_empty_trimmed() {
    assert_eq!(non_empty_trimmed("  Acme  "), Some("Acme".to_string()));
    assert_eq!(non_empty_trimmed("   "), None);
    assert_eq!(non_empty_trimmed(""), None);
}
