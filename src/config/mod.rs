//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, meta tag preference lists)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ExtractionMode, LogFormat, LogLevel};
