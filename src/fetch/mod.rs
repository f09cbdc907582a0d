//! Target page retrieval.
//!
//! This module provides:
//! - Validation of the target URL before any request is made
//! - Page fetching with the configured client and a single retry on transient failures

mod page;
mod target;

// Re-export public API
pub use page::fetch_page;
pub use target::validate_target_url;
