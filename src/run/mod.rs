//! Run orchestration.
//!
//! Loads and deduplicates the domain list, builds the policy's pipeline and
//! output sink, drives the batches, and reports.

mod batches;
mod driver;
mod report;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::app::{print_probe_failure_statistics, print_run_summary};
use crate::config::{Config, OutputPaths, Policy};
use crate::error_handling::ProcessingStats;
use crate::export::{BatchSink, CsvAuditSink, CsvResolutionSink};
use crate::input::{dedup_case_insensitive, dedup_exact, load_domains};
use crate::probe::{AuditProbe, DomainProbe, ProbeContext, ResolverProbe};
use crate::scheduler::{AuditBuckets, BucketSet, ResolutionBuckets};

// Re-export public API
pub use batches::{split_batches, Batch};
pub use driver::{drive_batches, DriveSummary};
pub use report::RunReport;

/// Runs the full multi-signal audit described by `config`.
///
/// Writes the parked, active, and error buckets batch by batch.
///
/// # Errors
///
/// Returns an error if the configuration is invalid (`ConfigError`), the
/// input cannot be loaded (`InputError`), network resources cannot be
/// initialized, or output cannot be written.
///
/// # Example
///
/// ```no_run
/// use parked_audit::{run_audit, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     input: PathBuf::from("extracted_urls.csv"),
///     ..Default::default()
/// };
/// let report = run_audit(config).await?;
/// println!("{} parked", report.counts.parked);
/// # Ok(())
/// # }
/// ```
pub async fn run_audit(config: Config) -> Result<RunReport> {
    let (config, domains) = prepare(config, Policy::Audit)?;
    let stats = Arc::new(ProcessingStats::new());
    let ctx = ProbeContext::new(Arc::clone(&config), Arc::clone(&stats))
        .context("Failed to initialize network resources")?;
    let probe = Arc::new(AuditProbe::new(ctx));
    let mut sink = CsvAuditSink::new(config.outputs.clone());

    execute::<_, AuditBuckets, _>(&probe, &mut sink, &domains, &config, Policy::Audit, &stats)
        .await
}

/// Runs the resolver-only pass described by `config`.
///
/// Writes the resolving, non-resolving, parked-IP, and error buckets batch
/// by batch.
///
/// # Errors
///
/// Same as [`run_audit`].
pub async fn run_resolve(config: Config) -> Result<RunReport> {
    let (config, domains) = prepare(config, Policy::Resolve)?;
    let stats = Arc::new(ProcessingStats::new());
    let ctx = ProbeContext::new(Arc::clone(&config), Arc::clone(&stats))
        .context("Failed to initialize network resources")?;
    let probe = Arc::new(ResolverProbe::new(ctx));
    let mut sink = CsvResolutionSink::new(config.outputs.clone());

    execute::<_, ResolutionBuckets, _>(&probe, &mut sink, &domains, &config, Policy::Resolve, &stats)
        .await
}

/// Validates `config`, loads the domain list, and prepares output directories.
fn prepare(config: Config, policy: Policy) -> Result<(Arc<Config>, Vec<String>)> {
    config.validate()?;
    log_signatures(&config, policy);

    let loaded = load_domains(&config.input)?;
    let loaded_count = loaded.len();
    let domains = match policy {
        Policy::Resolve => dedup_exact(loaded),
        Policy::Audit => dedup_case_insensitive(loaded),
    };
    if domains.len() < loaded_count {
        info!(
            "Removed {} duplicate domains ({} unique)",
            loaded_count - domains.len(),
            domains.len()
        );
    }

    create_output_dirs(&config.outputs)?;
    Ok((Arc::new(config), domains))
}

fn log_signatures(config: &Config, policy: Policy) {
    info!("Using {} known parked IPs", config.parked_ips.len());
    if config.parked_ips.is_empty() {
        warn!("Parked IP list is empty, no domain can match by address");
    }
    if matches!(policy, Policy::Audit) {
        info!("Using {} keyword signatures", config.keywords.len());
        if config.keywords.is_empty() {
            warn!("Keyword list is empty, only the parked IP rule can fire");
        }
    }
}

fn create_output_dirs(outputs: &OutputPaths) -> Result<()> {
    let files = [
        &outputs.resolving,
        &outputs.non_resolving,
        &outputs.parked_ip,
        &outputs.parked,
        &outputs.active,
        &outputs.errors,
    ];
    for dir in files.iter().filter_map(|file| file.parent()) {
        if dir != Path::new("") {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        }
    }
    Ok(())
}

/// Drives `probe` over `domains` and reports.
pub async fn execute<P, B, S>(
    probe: &Arc<P>,
    sink: &mut S,
    domains: &[String],
    config: &Config,
    policy: Policy,
    stats: &ProcessingStats,
) -> Result<RunReport>
where
    P: DomainProbe,
    B: BucketSet<Record = P::Record>,
    S: BatchSink<B>,
{
    let start_time = Instant::now();
    info!(
        "Starting {policy:?} run: {} domains, batch size {}, start batch {}, max concurrency {}",
        domains.len(),
        config.batch_size,
        config.start_batch,
        config.max_concurrency
    );

    let summary = drive_batches(probe, sink, domains, config, policy, stats).await?;
    let elapsed_seconds = start_time.elapsed().as_secs_f64();

    print_probe_failure_statistics(stats);
    print_run_summary(domains.len(), &summary.counts, elapsed_seconds);

    Ok(RunReport {
        policy,
        total_domains: domains.len(),
        total_batches: summary.total_batches,
        start_batch: config.start_batch,
        batches_processed: summary.batches_processed,
        counts: summary.counts,
        elapsed_seconds,
    })
}
