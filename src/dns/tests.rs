//! DNS module tests.

use super::*;
use crate::classify::DnsOutcome;
use crate::error_handling::{ProbeFailure, ProcessingStats};
use crate::initialization::init_resolver;
use std::time::Duration;

#[tokio::test]
async fn test_ip_literal_resolves_without_network() {
    // hickory answers IP literals locally
    let resolver = init_resolver(Duration::from_secs(2));
    let stats = ProcessingStats::new();
    let outcome = resolve_dns("34.102.136.180", &resolver, Duration::from_secs(2), &stats).await;
    assert_eq!(
        outcome,
        DnsOutcome::Resolved(vec!["34.102.136.180".to_string()])
    );
    assert_eq!(stats.total(), 0);
}

#[tokio::test]
async fn test_lookup_ip_literal() {
    let resolver = init_resolver(Duration::from_secs(2));
    let stats = ProcessingStats::new();
    let ip = lookup_ip("185.53.177.29", &resolver, Duration::from_secs(2), &stats).await;
    assert_eq!(ip.as_deref(), Some("185.53.177.29"));
}

#[tokio::test]
async fn test_zero_timeout_collapses_to_unresolved() {
    let resolver = init_resolver(Duration::from_secs(2));
    let stats = ProcessingStats::new();
    let outcome = resolve_dns(
        "definitely-does-not-exist-12345.invalid",
        &resolver,
        Duration::ZERO,
        &stats,
    )
    .await;
    assert_eq!(outcome, DnsOutcome::Unresolved);
    assert_eq!(stats.total(), 1);
}

#[tokio::test]
#[ignore] // Requires network access. Run with: cargo test dns -- --ignored
async fn test_resolve_dns_real_domain() {
    let resolver = init_resolver(Duration::from_secs(5));
    let stats = ProcessingStats::new();
    let outcome = resolve_dns("google.com", &resolver, Duration::from_secs(5), &stats).await;
    let DnsOutcome::Resolved(ips) = outcome else {
        panic!("google.com should resolve");
    };
    for ip in &ips {
        assert!(ip.parse::<std::net::Ipv4Addr>().is_ok());
    }
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_resolve_dns_nxdomain() {
    let resolver = init_resolver(Duration::from_secs(5));
    let stats = ProcessingStats::new();
    let outcome = resolve_dns(
        "definitely-does-not-exist-12345.invalid",
        &resolver,
        Duration::from_secs(5),
        &stats,
    )
    .await;
    assert_eq!(outcome, DnsOutcome::Unresolved);
    assert_eq!(stats.get_count(ProbeFailure::DnsNoRecords), 1);
}
