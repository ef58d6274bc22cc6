//! End-of-run statistics printing.

use log::{info, warn};
use strum::IntoEnumIterator;

use crate::error_handling::{ProbeFailure, ProcessingStats};
use crate::scheduler::BucketCounts;

/// Prints probe failure counts to the log.
///
/// Probe failures are negative signals, not errors; the counts explain why
/// signals were missing. Failures that sent a whole domain to the error
/// bucket are listed separately. Kinds that never occurred are skipped.
pub fn print_probe_failure_statistics(stats: &ProcessingStats) {
    if stats.total() == 0 {
        return;
    }

    let (domain_errors, signal_failures) = occurred_failures(stats);
    if !signal_failures.is_empty() {
        let total: usize = signal_failures.iter().map(|(_, count)| count).sum();
        info!("Probe Failure Counts ({} total):", total);
        for (failure, count) in &signal_failures {
            info!("   {}: {}", failure.as_str(), count);
        }
    }
    if !domain_errors.is_empty() {
        warn!("Domain Error Counts:");
        for (failure, count) in &domain_errors {
            warn!("   {}: {}", failure.as_str(), count);
        }
    }
}

type FailureCounts = Vec<(ProbeFailure, usize)>;

/// Non-zero counts split into (domain errors, signal failures).
fn occurred_failures(stats: &ProcessingStats) -> (FailureCounts, FailureCounts) {
    ProbeFailure::iter()
        .map(|failure| (failure, stats.get_count(failure)))
        .filter(|(_, count)| *count > 0)
        .partition(|(failure, _)| failure.is_domain_error())
}

/// Prints a one-line summary of the run.
pub fn print_run_summary(total_domains: usize, counts: &BucketCounts, elapsed_seconds: f64) {
    info!(
        "✅ Processed {} domain{} in {:.1}s: {}",
        total_domains,
        if total_domains == 1 { "" } else { "s" },
        elapsed_seconds,
        counts
    );
}
