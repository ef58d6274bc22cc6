//! Crash recovery through batch resumption, with real CSV output.

mod helpers;

use std::sync::Arc;

use anyhow::Result;
use helpers::{domain_list, read_lines, NamedProbe};
use parked_audit::config::{Config, OutputPaths, Policy};
use parked_audit::error_handling::ProcessingStats;
use parked_audit::export::{BatchSink, CsvAuditSink};
use parked_audit::run::execute;
use parked_audit::scheduler::AuditBuckets;
use tempfile::TempDir;

/// Persists normally, then fails from batch `crash_at` on.
struct CrashingSink {
    inner: CsvAuditSink,
    crash_at: usize,
}

impl BatchSink<AuditBuckets> for CrashingSink {
    fn persist(&mut self, batch_index: usize, buckets: &AuditBuckets) -> Result<()> {
        if batch_index >= self.crash_at {
            anyhow::bail!("simulated crash");
        }
        self.inner.persist(batch_index, buckets)
    }
}

fn config(outputs: OutputPaths, start_batch: usize) -> Config {
    Config {
        outputs,
        batch_size: 100,
        start_batch,
        max_concurrency: 32,
        progress_interval: 100,
        ..Default::default()
    }
}

fn sorted_rows(lines: Vec<String>) -> (String, Vec<String>) {
    let mut iter = lines.into_iter();
    let header = iter.next().unwrap_or_default();
    let mut rows: Vec<String> = iter.collect();
    rows.sort();
    (header, rows)
}

#[tokio::test]
async fn test_resumed_run_matches_uninterrupted_run() {
    let domains = domain_list(250);
    let probe = Arc::new(NamedProbe);

    // Uninterrupted reference run
    let reference_dir = TempDir::new().expect("temp dir");
    let reference = OutputPaths::in_dir(reference_dir.path());
    let report = execute::<_, AuditBuckets, _>(
        &probe,
        &mut CsvAuditSink::new(reference.clone()),
        &domains,
        &config(reference.clone(), 0),
        Policy::Audit,
        &ProcessingStats::new(),
    )
    .await
    .expect("reference run");
    assert_eq!(report.batches_processed, 3);
    assert_eq!(report.counts.parked, 50);
    assert_eq!(report.counts.active, 200);

    // Run that crashes while persisting batch 1
    let resumed_dir = TempDir::new().expect("temp dir");
    let resumed = OutputPaths::in_dir(resumed_dir.path());
    let crashed = execute::<_, AuditBuckets, _>(
        &probe,
        &mut CrashingSink {
            inner: CsvAuditSink::new(resumed.clone()),
            crash_at: 1,
        },
        &domains,
        &config(resumed.clone(), 0),
        Policy::Audit,
        &ProcessingStats::new(),
    )
    .await;
    assert!(crashed.is_err());
    assert_eq!(read_lines(&resumed.active).len(), 1 + 80);

    // Resume at the first unfinished batch
    let report = execute::<_, AuditBuckets, _>(
        &probe,
        &mut CsvAuditSink::new(resumed.clone()),
        &domains,
        &config(resumed.clone(), 1),
        Policy::Audit,
        &ProcessingStats::new(),
    )
    .await
    .expect("resumed run");
    assert_eq!(report.batches_processed, 2);

    for (expected, actual) in [
        (&reference.parked, &resumed.parked),
        (&reference.active, &resumed.active),
        (&reference.errors, &resumed.errors),
    ] {
        let (expected_header, expected_rows) = sorted_rows(read_lines(expected));
        let (actual_header, actual_rows) = sorted_rows(read_lines(actual));
        assert_eq!(expected_header, actual_header);
        assert_eq!(expected_rows, actual_rows);
    }
}

#[tokio::test]
async fn test_resume_into_fresh_directory_writes_headers() {
    let domains = domain_list(150);
    let probe = Arc::new(NamedProbe);
    let dir = TempDir::new().expect("temp dir");
    let outputs = OutputPaths::in_dir(dir.path());

    execute::<_, AuditBuckets, _>(
        &probe,
        &mut CsvAuditSink::new(outputs.clone()),
        &domains,
        &config(outputs.clone(), 1),
        Policy::Audit,
        &ProcessingStats::new(),
    )
    .await
    .expect("run");

    let parked = read_lines(&outputs.parked);
    assert_eq!(parked[0], "domain,ip,reason");
    assert_eq!(parked.len(), 1 + 10);
    assert!(parked[1..].iter().all(|row| row.ends_with(",Matched parked keyword in HTML")));
    assert_eq!(read_lines(&outputs.errors), vec!["domain,error"]);
}

#[tokio::test]
async fn test_failures_land_in_error_file() {
    let domains: Vec<String> = ["site.example", "panic.example", "bad host", "parked.example"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let probe = Arc::new(NamedProbe);
    let dir = TempDir::new().expect("temp dir");
    let outputs = OutputPaths::in_dir(dir.path());
    let stats = ProcessingStats::new();

    let report = execute::<_, AuditBuckets, _>(
        &probe,
        &mut CsvAuditSink::new(outputs.clone()),
        &domains,
        &config(outputs.clone(), 0),
        Policy::Audit,
        &stats,
    )
    .await
    .expect("run");

    assert_eq!(report.counts.errors, 2);
    assert!(report.should_fail(parked_audit::FailOn::AnyError));

    let (header, rows) = sorted_rows(read_lines(&outputs.errors));
    assert_eq!(header, "domain,error");
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("bad host,Invalid domain"));
    assert!(rows[1].starts_with("panic.example,"));
    assert!(rows[1].contains("Task panicked"));
    assert_eq!(
        read_lines(&outputs.active),
        vec!["domain,ip,reason", "site.example,93.184.216.34,Active"]
    );
}
