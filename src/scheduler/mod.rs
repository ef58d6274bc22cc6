//! Bounded-concurrency batch scheduler.
//!
//! Runs one policy pipeline per domain with at most `max_concurrency` units
//! of work in flight, routes each finished unit into the policy's buckets,
//! and returns once every domain of the batch has produced exactly one
//! outcome. Buckets are only touched from the scheduling loop, so they need
//! no locking.

mod buckets;

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::warn;
use tokio::task::JoinError;
use tokio::time::error::Elapsed;

use crate::app::log_batch_progress;
use crate::error_handling::{ProbeFailure, ProcessingStats};
use crate::probe::DomainProbe;
use crate::utils::sanitize_and_truncate_error_message;

// Re-export public API
pub use buckets::{AuditBuckets, BucketCounts, BucketSet, Outcome, ResolutionBuckets};

/// Knobs for one `run_batch` call.
#[derive(Debug, Clone)]
pub struct SchedulerOptions {
    /// Upper bound on units of work in flight.
    pub max_concurrency: usize,
    /// Log progress every N completions.
    pub progress_interval: usize,
    /// Hard deadline for one domain's whole pipeline.
    pub domain_deadline: Duration,
    /// Zero-based batch index, used for logging only.
    pub batch_index: usize,
}

type UnitResult<R> = Result<Result<anyhow::Result<R>, Elapsed>, JoinError>;

/// Processes one batch of domains and returns the filled buckets.
///
/// Every domain yields exactly one outcome: the probe's record, or an error
/// entry when the pipeline rejected the domain, exceeded its deadline, or
/// panicked. A failing domain never affects the others.
///
/// # Arguments
///
/// * `probe` - The policy pipeline, shared by all units of work
/// * `domains` - Domains of this batch
/// * `opts` - Concurrency bound, progress interval, and per-domain deadline
/// * `stats` - Failure counters for deadline and panic outcomes
pub async fn run_batch<P, B>(
    probe: &Arc<P>,
    domains: &[String],
    opts: &SchedulerOptions,
    stats: &ProcessingStats,
) -> B
where
    P: DomainProbe,
    B: BucketSet<Record = P::Record>,
{
    let total = domains.len();
    let max_in_flight = opts.max_concurrency.max(1);
    let progress_interval = opts.progress_interval.max(1);
    let start_time = Instant::now();

    let mut buckets = B::default();
    let mut pending = domains.iter();
    let mut tasks = FuturesUnordered::new();
    let mut completed = 0usize;

    loop {
        while tasks.len() < max_in_flight {
            let Some(domain) = pending.next() else {
                break;
            };
            tasks.push(spawn_unit(
                Arc::clone(probe),
                Arc::from(domain.as_str()),
                opts.domain_deadline,
            ));
        }

        let Some((domain, result)) = tasks.next().await else {
            break;
        };
        buckets.route(into_outcome(&domain, result, opts.domain_deadline, stats));

        completed += 1;
        if completed % progress_interval == 0 {
            log_batch_progress(opts.batch_index, completed, total, start_time);
        }
    }

    buckets
}

/// Spawns one domain's pipeline under its deadline.
///
/// The domain is kept outside the task so a panic can still be attributed.
fn spawn_unit<P: DomainProbe>(
    probe: Arc<P>,
    domain: Arc<str>,
    deadline: Duration,
) -> impl Future<Output = (Arc<str>, UnitResult<P::Record>)> {
    let task_domain = Arc::clone(&domain);
    let handle = tokio::spawn(async move {
        tokio::time::timeout(deadline, probe.probe(task_domain)).await
    });
    async move { (domain, handle.await) }
}

fn into_outcome<R>(
    domain: &str,
    result: UnitResult<R>,
    deadline: Duration,
    stats: &ProcessingStats,
) -> Outcome<R> {
    let detail = match result {
        Ok(Ok(Ok(record))) => return Outcome::Completed(record),
        Ok(Ok(Err(e))) => format!("{e:#}"),
        Ok(Err(_)) => {
            stats.increment(ProbeFailure::DomainTimeout);
            format!(
                "{} after {} seconds",
                ProbeFailure::DomainTimeout,
                deadline.as_secs()
            )
        }
        Err(join_error) => {
            stats.increment(ProbeFailure::TaskPanic);
            if join_error.is_panic() {
                format!("{}: {join_error}", ProbeFailure::TaskPanic)
            } else {
                format!("Task cancelled: {join_error}")
            }
        }
    };

    warn!("Failed to process domain {domain}: {detail}");
    Outcome::Failed {
        domain: domain.to_string(),
        detail: sanitize_and_truncate_error_message(&detail),
    }
}

#[cfg(test)]
mod tests;
