//! Run report.

use crate::config::{FailOn, Policy};
use crate::scheduler::BucketCounts;

/// Results of a classification run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Policy the run applied
    pub policy: Policy,
    /// Domains after deduplication
    pub total_domains: usize,
    /// Number of batches the list was split into
    pub total_batches: usize,
    /// First batch processed
    pub start_batch: usize,
    /// Batches processed in this run
    pub batches_processed: usize,
    /// Records per bucket across processed batches
    pub counts: BucketCounts,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl RunReport {
    /// True if `fail_on` asks for a failure exit code for this run.
    pub fn should_fail(&self, fail_on: FailOn) -> bool {
        match fail_on {
            FailOn::Never => false,
            FailOn::AnyError => self.counts.errors > 0,
        }
    }
}
