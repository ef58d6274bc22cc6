//! Scheduler tests with scripted pipelines.

use super::*;
use crate::classify::{ClassificationRecord, ParkedReason, ResolutionRecord};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Behaves according to the domain's prefix.
#[derive(Default)]
struct ScriptedProbe {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl DomainProbe for ScriptedProbe {
    type Record = ClassificationRecord;

    fn probe(
        &self,
        domain: Arc<str>,
    ) -> impl Future<Output = anyhow::Result<ClassificationRecord>> + Send {
        async move {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if domain.starts_with("panic") {
                panic!("scripted panic for {domain}");
            }
            if domain.starts_with("slow") {
                tokio::time::sleep(Duration::from_secs(30)).await;
            }
            if domain.starts_with("invalid") {
                anyhow::bail!("Invalid domain '{domain}'");
            }
            if domain.starts_with("parked") {
                return Ok(ClassificationRecord::parked(
                    domain.to_string(),
                    Some("34.102.136.180".to_string()),
                    ParkedReason::ParkedIp,
                ));
            }
            Ok(ClassificationRecord::active(domain.to_string(), None))
        }
    }
}

/// Resolves everything except names starting with "nx".
struct ScriptedResolver;

impl DomainProbe for ScriptedResolver {
    type Record = ResolutionRecord;

    fn probe(
        &self,
        domain: Arc<str>,
    ) -> impl Future<Output = anyhow::Result<ResolutionRecord>> + Send {
        async move {
            let resolves = !domain.starts_with("nx");
            Ok(ResolutionRecord {
                domain: domain.to_string(),
                resolves_dns: resolves,
                ip_addresses: if resolves {
                    vec!["184.168.131.241".to_string()]
                } else {
                    Vec::new()
                },
                parked_ip: resolves && domain.starts_with("parked"),
            })
        }
    }
}

fn options(max_concurrency: usize) -> SchedulerOptions {
    SchedulerOptions {
        max_concurrency,
        progress_interval: 2,
        domain_deadline: Duration::from_millis(500),
        batch_index: 0,
    }
}

fn domains(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_every_domain_gets_exactly_one_outcome() {
    let probe = Arc::new(ScriptedProbe::default());
    let stats = ProcessingStats::new();
    let input = domains(&[
        "parked1.example",
        "active1.example",
        "invalid host",
        "parked2.example",
        "active2.example",
    ]);

    let buckets: AuditBuckets = run_batch(&probe, &input, &options(3), &stats).await;

    let counts = buckets.counts();
    assert_eq!(counts.parked, 2);
    assert_eq!(counts.active, 2);
    assert_eq!(counts.errors, 1);
    assert_eq!(counts.parked + counts.active + counts.errors, input.len());
    assert_eq!(buckets.errors[0].domain, "invalid host");
    assert!(buckets.errors[0]
        .error_detail
        .as_deref()
        .unwrap_or_default()
        .contains("Invalid domain"));
}

#[tokio::test]
async fn test_panic_is_isolated_to_its_domain() {
    let probe = Arc::new(ScriptedProbe::default());
    let stats = ProcessingStats::new();
    let input = domains(&["panic.example", "active.example", "parked.example"]);

    let buckets: AuditBuckets = run_batch(&probe, &input, &options(10), &stats).await;

    assert_eq!(buckets.errors.len(), 1);
    assert_eq!(buckets.errors[0].domain, "panic.example");
    assert_eq!(buckets.active.len(), 1);
    assert_eq!(buckets.parked.len(), 1);
    assert_eq!(stats.get_count(ProbeFailure::TaskPanic), 1);
}

#[tokio::test]
async fn test_deadline_routes_to_errors() {
    let probe = Arc::new(ScriptedProbe::default());
    let stats = ProcessingStats::new();
    let input = domains(&["slow.example", "active.example"]);

    let buckets: AuditBuckets = run_batch(&probe, &input, &options(10), &stats).await;

    assert_eq!(buckets.errors.len(), 1);
    assert_eq!(buckets.errors[0].domain, "slow.example");
    assert!(buckets.errors[0]
        .error_detail
        .as_deref()
        .unwrap_or_default()
        .starts_with("Domain processing timeout"));
    assert_eq!(stats.get_count(ProbeFailure::DomainTimeout), 1);
}

#[tokio::test]
async fn test_concurrency_bound_is_respected() {
    let probe = Arc::new(ScriptedProbe::default());
    let stats = ProcessingStats::new();
    let input: Vec<String> = (0..40).map(|i| format!("active{i}.example")).collect();

    let buckets: AuditBuckets = run_batch(&probe, &input, &options(4), &stats).await;

    assert_eq!(buckets.active.len(), 40);
    assert!(probe.peak.load(Ordering::SeqCst) <= 4);
    assert!(probe.peak.load(Ordering::SeqCst) >= 1);
}

#[tokio::test]
async fn test_empty_batch() {
    let probe = Arc::new(ScriptedProbe::default());
    let stats = ProcessingStats::new();
    let buckets: AuditBuckets = run_batch(&probe, &[], &options(4), &stats).await;
    assert_eq!(buckets.counts(), BucketCounts::default());
}

#[tokio::test]
async fn test_resolution_buckets_from_batch() {
    let probe = Arc::new(ScriptedResolver);
    let stats = ProcessingStats::new();
    let input = domains(&["parked.example", "ok.example", "nx.example"]);

    let buckets: ResolutionBuckets = run_batch(&probe, &input, &options(2), &stats).await;

    assert_eq!(buckets.resolving.len(), 2);
    assert_eq!(buckets.non_resolving.len(), 1);
    assert_eq!(buckets.parked.len(), 1);
    assert_eq!(buckets.parked[0].domain, "parked.example");
    assert!(buckets.errors.is_empty());
}
