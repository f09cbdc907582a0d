//! Extraction statistics tracking.
//!
//! This module provides warning counters for a single document analysis.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::WarningType;

/// Extraction warning tracker.
///
/// Tracks warnings using atomic counters so extractors can record through a
/// shared reference. All warning types are initialized to zero on creation.
#[derive(Debug)]
pub struct ExtractionStats {
    warnings: HashMap<WarningType, AtomicUsize>,
}

impl Default for ExtractionStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionStats {
    pub fn new() -> Self {
        let mut warnings = HashMap::new();
        for warning in WarningType::iter() {
            warnings.insert(warning, AtomicUsize::new(0));
        }
        ExtractionStats { warnings }
    }

    /// Increment a warning counter.
    pub fn increment_warning(&self, warning: WarningType) {
        if let Some(counter) = self.warnings.get(&warning) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment warning counter for {:?} which is not in the map. \
                 This indicates a bug in ExtractionStats initialization.",
                warning
            );
        }
    }

    /// Get the count for a warning type.
    ///
    /// Returns 0 if the warning type is not in the map (should never happen if properly initialized).
    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings
            .get(&warning)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total warning count across all warning types.
    pub fn total_warnings(&self) -> usize {
        WarningType::iter().map(|w| self.get_warning_count(w)).sum()
    }

    /// Logs the non-zero warning counters, one line each.
    ///
    /// Logs nothing when the analysis raised no warnings.
    pub fn log_summary(&self) {
        let total_warnings = self.total_warnings();
        if total_warnings == 0 {
            return;
        }
        log::info!("Warning Counts ({} total):", total_warnings);
        for warning_type in WarningType::iter() {
            let count = self.get_warning_count(warning_type);
            if count > 0 {
                log::info!("   {}: {}", warning_type.as_str(), count);
            }
        }
    }
}
