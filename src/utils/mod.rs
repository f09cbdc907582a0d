//! Shared helpers.
//!
//! This module provides:
//! - Construction of static CSS selectors and regexes
//! - Text normalization helpers

mod statics;
mod text;

pub use statics::{compile_regex_unsafe, parse_selector_unsafe};
pub use text::{collapse_whitespace, non_empty_trimmed};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
