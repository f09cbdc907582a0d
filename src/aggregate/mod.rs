//! Result aggregation.
//!
//! Merges the outputs of the field extractors and the JSON-LD interpreter into
//! one result record per page, applying source precedence and deduplication:
//! - `ProfileResult` for social profile pages
//! - `CompanyResult` for company sites
//!
//! Each analysis runs over a freshly parsed document with its own
//! `ExtractionStats`; the warning summary is logged once the record is built.

mod company;
mod social;
mod sources;

use serde::Serialize;

use crate::config::ExtractionMode;

// Re-export public API
pub use company::{analyze_company, CompanyResult};
pub use social::{analyze_social, ProfileResult};
pub use sources::{descriptions, titles};

/// Result of one page analysis, serialized as the bare record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScrapeOutput {
    Social(ProfileResult),
    Company(CompanyResult),
}

/// Analyzes an HTML page in the given mode.
pub fn analyze(html: &str, mode: ExtractionMode) -> ScrapeOutput {
    match mode {
        ExtractionMode::Social => ScrapeOutput::Social(analyze_social(html)),
        ExtractionMode::Company => ScrapeOutput::Company(analyze_company(html)),
    }
}
