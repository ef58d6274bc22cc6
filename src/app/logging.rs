//! Progress logging utilities.

use std::time::Instant;

use log::info;

use crate::scheduler::BucketCounts;

/// Logs progress within one batch.
///
/// # Arguments
///
/// * `batch_index` - Zero-based index of the batch being processed
/// * `completed` - Units of work finished so far in this batch
/// * `total` - Number of domains in this batch
/// * `start_time` - When the batch started
pub fn log_batch_progress(batch_index: usize, completed: usize, total: usize, start_time: Instant) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "🔄 Batch {}: Processed {}/{} domains ({:.2} domains/sec)",
        batch_index + 1,
        completed,
        total,
        rate
    );
}

/// Logs the per-bucket summary of a finished batch.
pub fn log_batch_summary(
    batch_index: usize,
    total_batches: usize,
    counts: &BucketCounts,
    start_time: Instant,
) {
    info!(
        "✅ Batch {}/{} done in {:.2}s: {}",
        batch_index + 1,
        total_batches,
        start_time.elapsed().as_secs_f64(),
        counts
    );
}
