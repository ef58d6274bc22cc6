//! End-to-end runs through `run_resolve` and `run_audit` without public
//! network access: IP literals resolve locally and HTTP is served by a
//! local mock server.

mod helpers;

use std::time::Duration;

use helpers::read_lines;
use parked_audit::{run_audit, run_resolve, Config, ConfigError, OutputPaths};
use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(dir: &TempDir, domains: &str) -> Config {
    let input = dir.path().join("domains.csv");
    std::fs::write(&input, domains).expect("seed input");
    Config {
        input,
        outputs: OutputPaths::in_dir(&dir.path().join("out")),
        probe_timeout: Duration::from_secs(2),
        dns_timeout: Duration::from_secs(1),
        max_concurrency: 4,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_run_resolve_with_ip_literals() {
    let dir = TempDir::new().expect("temp dir");
    let config = config_for(&dir, "domain\n34.102.136.180\n93.184.216.34\n34.102.136.180\n");
    let outputs = config.outputs.clone();

    let report = run_resolve(config).await.expect("run");

    assert_eq!(report.total_domains, 2);
    assert_eq!(report.counts.resolving, 2);
    assert_eq!(report.counts.parked, 1);
    assert_eq!(report.counts.non_resolving, 0);
    assert_eq!(
        read_lines(&outputs.parked_ip),
        vec![
            "domain,resolves_dns,ip_addresses,parked_ip",
            "34.102.136.180,true,34.102.136.180,true",
        ]
    );
    assert_eq!(
        read_lines(&outputs.non_resolving),
        vec!["domain,resolves_dns,ip_addresses,parked_ip"]
    );
    assert_eq!(read_lines(&outputs.errors), vec!["domain,error"]);
}

#[tokio::test]
async fn test_run_audit_parked_by_page_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body>Buy this domain today</body></html>"),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("temp dir");
    let config = config_for(&dir, &format!("domain\n{}\n", server.address()));
    let outputs = config.outputs.clone();

    let report = run_audit(config).await.expect("run");

    assert_eq!(report.counts.parked, 1);
    assert_eq!(report.counts.active, 0);
    let parked = read_lines(&outputs.parked);
    assert_eq!(parked.len(), 2);
    assert!(parked[1].starts_with(&format!("{},", server.address())));
    assert!(parked[1].ends_with(",Matched parked keyword in HTML"));
}

#[tokio::test]
async fn test_run_audit_parked_ip_literal_skips_other_probes() {
    let dir = TempDir::new().expect("temp dir");
    let config = config_for(&dir, "185.53.177.29\n");
    let outputs = config.outputs.clone();

    let report = run_audit(config).await.expect("run");

    assert_eq!(report.counts.parked, 1);
    assert_eq!(
        read_lines(&outputs.parked),
        vec![
            "domain,ip,reason",
            "185.53.177.29,185.53.177.29,Matched parked IP",
        ]
    );
    assert_eq!(read_lines(&outputs.active), vec!["domain,ip,reason"]);
}

#[tokio::test]
async fn test_invalid_config_is_rejected_before_probing() {
    let dir = TempDir::new().expect("temp dir");
    let mut config = config_for(&dir, "domain\nexample.com\n");
    config.max_concurrency = 0;

    let err = run_audit(config).await.expect_err("invalid config");
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::ZeroConcurrency)
    );
    assert!(!dir.path().join("out").exists());
}

#[tokio::test]
#[ignore] // Requires public DNS and HTTP
async fn test_run_audit_against_real_domains() {
    let dir = TempDir::new().expect("temp dir");
    let config = config_for(&dir, "domain\nexample.com\nthis-domain-should-not-exist-4815162342.com\n");

    let report = run_audit(config).await.expect("run");
    assert_eq!(report.counts.parked + report.counts.active + report.counts.errors, 2);
}
