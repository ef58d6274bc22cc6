//! Resumable batch driver.
//!
//! Batches run strictly one after another starting at `start_batch`; each
//! batch is persisted before the next one starts, so a crashed run can be
//! resumed at the first unfinished batch.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::app::log_batch_summary;
use crate::config::{Config, Policy};
use crate::error_handling::ProcessingStats;
use crate::export::BatchSink;
use crate::probe::DomainProbe;
use crate::scheduler::{run_batch, BucketCounts, BucketSet, SchedulerOptions};

use super::batches::split_batches;

/// What the driver did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriveSummary {
    pub total_batches: usize,
    pub batches_processed: usize,
    pub counts: BucketCounts,
}

/// Runs every batch from `config.start_batch` to the end and persists each.
///
/// Batches before the start index are neither probed nor written.
///
/// # Errors
///
/// Returns an error if a batch cannot be persisted; batches already
/// persisted stay on disk.
pub async fn drive_batches<P, B, S>(
    probe: &Arc<P>,
    sink: &mut S,
    domains: &[String],
    config: &Config,
    policy: Policy,
    stats: &ProcessingStats,
) -> Result<DriveSummary>
where
    P: DomainProbe,
    B: BucketSet<Record = P::Record>,
    S: BatchSink<B>,
{
    let batches = split_batches(domains, config.batch_size);
    let total_batches = batches.len();
    if config.start_batch >= total_batches {
        warn!(
            "Start batch {} is past the last batch ({} batches of {}); nothing to do",
            config.start_batch, total_batches, config.batch_size
        );
    }

    let mut summary = DriveSummary {
        total_batches,
        ..Default::default()
    };

    for batch in batches.into_iter().skip(config.start_batch) {
        info!(
            "📦 Processing batch {}/{} (domains {} to {})",
            batch.index + 1,
            total_batches,
            batch.start,
            batch.end()
        );
        let batch_start = Instant::now();
        let opts = SchedulerOptions {
            max_concurrency: config.max_concurrency,
            progress_interval: config.progress_interval,
            domain_deadline: config.domain_deadline(policy),
            batch_index: batch.index,
        };

        let buckets: B = run_batch(probe, batch.domains, &opts, stats).await;
        sink.persist(batch.index, &buckets)
            .with_context(|| format!("Failed to write output of batch {}", batch.index + 1))?;

        let counts = buckets.counts();
        log_batch_summary(batch.index, total_batches, &counts, batch_start);
        summary.counts += counts;
        summary.batches_processed += 1;
    }

    Ok(summary)
}
