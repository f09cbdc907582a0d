//! Error handling and extraction statistics.
//!
//! This module provides:
//! - Error type definitions (input, fetch, initialization)
//! - Fetch error categorization and retry strategy
//! - Extraction warning tracking
//!
//! Problems are categorized into:
//! - **Errors**: Failures that end a scrape call (bad input, failed fetch)
//! - **Warnings**: Missing or malformed optional data that still yields a result

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, get_retry_strategy, is_retriable_error};
pub use stats::ExtractionStats;
pub use types::{ErrorType, InitializationError, InputError, ScrapeError, WarningType};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_extraction_stats_initialization() {
        let stats = ExtractionStats::new();
        for warning_type in WarningType::iter() {
            assert_eq!(stats.get_warning_count(warning_type), 0);
        }
    }

    #[test]
    fn test_extraction_stats_increment() {
        let stats = ExtractionStats::new();
        stats.increment_warning(WarningType::MalformedJsonLd);
        stats.increment_warning(WarningType::MalformedJsonLd);
        stats.increment_warning(WarningType::MissingTitle);
        assert_eq!(stats.get_warning_count(WarningType::MalformedJsonLd), 2);
        assert_eq!(stats.get_warning_count(WarningType::MissingTitle), 1);
        assert_eq!(stats.total_warnings(), 3);
    }

    #[test]
    fn test_extraction_stats_log_summary() {
        let stats = ExtractionStats::new();
        // Nothing to report
        stats.log_summary();

        stats.increment_warning(WarningType::InvalidLogoUrl);
        stats.log_summary();
        assert_eq!(stats.total_warnings(), 1);
    }
}
