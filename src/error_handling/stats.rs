//! Processing statistics tracking.
//!
//! This module provides thread-safe counters for probe failures during a run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ProbeFailure;

/// Thread-safe probe failure tracker.
///
/// Every `ProbeFailure` kind is initialized to zero on creation, so the map
/// is never mutated after construction and counters can be bumped from any
/// task through a shared `Arc`.
#[derive(Debug)]
pub struct ProcessingStats {
    failures: HashMap<ProbeFailure, AtomicUsize>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        let failures = ProbeFailure::iter()
            .map(|failure| (failure, AtomicUsize::new(0)))
            .collect();
        ProcessingStats { failures }
    }

    /// Increment a failure counter.
    pub fn increment(&self, failure: ProbeFailure) {
        if let Some(counter) = self.failures.get(&failure) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                failure
            );
        }
    }

    /// Get the count for a failure kind.
    pub fn get_count(&self, failure: ProbeFailure) -> usize {
        self.failures
            .get(&failure)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total count across all failure kinds.
    pub fn total(&self) -> usize {
        ProbeFailure::iter().map(|f| self.get_count(f)).sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
