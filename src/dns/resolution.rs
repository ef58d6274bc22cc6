//! Forward A-record resolution.

use std::net::IpAddr;
use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;
use log::debug;

use crate::classify::DnsOutcome;
use crate::error_handling::{categorize_resolve_error, ProbeFailure, ProcessingStats};

/// Resolves every IPv4 address of `domain`.
///
/// Any resolver error (NXDOMAIN, SERVFAIL, malformed response) or exceeding
/// `timeout` yields `DnsOutcome::Unresolved`; so does an answer without A
/// records.
pub async fn resolve_dns(
    domain: &str,
    resolver: &TokioAsyncResolver,
    timeout: Duration,
    stats: &ProcessingStats,
) -> DnsOutcome {
    match ipv4_addresses(domain, resolver, timeout, stats).await {
        Some(ips) if !ips.is_empty() => DnsOutcome::Resolved(ips),
        Some(_) => {
            stats.increment(ProbeFailure::DnsNoRecords);
            DnsOutcome::Unresolved
        }
        None => DnsOutcome::Unresolved,
    }
}

/// Best-effort lookup of a single address for `domain`.
///
/// Returns the first IPv4 address, or `None` on any failure.
pub async fn lookup_ip(
    domain: &str,
    resolver: &TokioAsyncResolver,
    timeout: Duration,
    stats: &ProcessingStats,
) -> Option<String> {
    let ips = ipv4_addresses(domain, resolver, timeout, stats).await?;
    let first = ips.into_iter().next();
    if first.is_none() {
        stats.increment(ProbeFailure::DnsNoRecords);
    }
    first
}

async fn ipv4_addresses(
    domain: &str,
    resolver: &TokioAsyncResolver,
    timeout: Duration,
    stats: &ProcessingStats,
) -> Option<Vec<String>> {
    match tokio::time::timeout(timeout, resolver.lookup_ip(domain)).await {
        Ok(Ok(response)) => Some(
            response
                .iter()
                .filter(IpAddr::is_ipv4)
                .map(|ip| ip.to_string())
                .collect(),
        ),
        Ok(Err(e)) => {
            debug!("DNS lookup failed for {domain}: {e}");
            stats.increment(categorize_resolve_error(&e));
            None
        }
        Err(_) => {
            debug!("DNS lookup timed out for {domain} after {timeout:?}");
            stats.increment(ProbeFailure::DnsTimeout);
            None
        }
    }
}
