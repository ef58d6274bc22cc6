//! Full multi-signal pipeline.
//!
//! Signals are gathered in rule order and the policy is consulted after each
//! stage, so a domain on a parking IP is never fetched and a keyword in the
//! body skips the TLS handshake. Because later rules only look at later
//! signals, this yields the same record as gathering everything first.

use std::future::Future;
use std::sync::Arc;

use anyhow::{bail, Result};
use log::debug;

use crate::classify::{classify_audit, first_parked_reason, AuditSignals, ClassificationRecord};
use crate::dns::lookup_ip;
use crate::error_handling::ProbeFailure;
use crate::fetch::fetch_http;
use crate::tls::fetch_tls_certificate_subject_cn;

use super::{DomainProbe, ProbeContext};

/// Runs DNS, HTTP, and TLS probes and applies the full policy.
pub struct AuditProbe {
    ctx: ProbeContext,
}

impl AuditProbe {
    pub fn new(ctx: ProbeContext) -> Self {
        Self { ctx }
    }

    async fn classify(&self, domain: &str) -> Result<ClassificationRecord> {
        let ctx = &self.ctx;
        let config = &ctx.config;

        if let Err(e) = validate_domain(domain) {
            ctx.stats.increment(ProbeFailure::InvalidDomain);
            return Err(e);
        }

        let mut signals = AuditSignals {
            ip: lookup_ip(domain, &ctx.resolver, config.dns_timeout, &ctx.stats).await,
            ..Default::default()
        };
        if first_parked_reason(&signals, &config.parked_ips, &config.keywords).is_some() {
            return Ok(classify_audit(domain, &signals, &config.parked_ips, &config.keywords));
        }

        signals.body = Some(fetch_http(domain, &ctx.client, &ctx.stats).await.into_body());
        if first_parked_reason(&signals, &config.parked_ips, &config.keywords).is_some() {
            return Ok(classify_audit(domain, &signals, &config.parked_ips, &config.keywords));
        }

        signals.cert_common_name = Some(
            fetch_tls_certificate_subject_cn(domain, &ctx.tls, config.probe_timeout, &ctx.stats)
                .await
                .into_common_name(),
        );
        let record = classify_audit(domain, &signals, &config.parked_ips, &config.keywords);
        debug!(
            "Classified {domain} as {} ({})",
            record.classification,
            record.reason.map(|r| r.as_str()).unwrap_or("no parked signal")
        );
        Ok(record)
    }
}

impl DomainProbe for AuditProbe {
    type Record = ClassificationRecord;

    fn probe(
        &self,
        domain: Arc<str>,
    ) -> impl Future<Output = Result<ClassificationRecord>> + Send {
        async move { self.classify(&domain).await }
    }
}

/// Rejects strings that cannot form an `http://<domain>/` URL.
pub(crate) fn validate_domain(domain: &str) -> Result<()> {
    let url = url::Url::parse(&format!("http://{domain}/"))
        .map_err(|e| anyhow::anyhow!("Invalid domain '{domain}': {e}"))?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => bail!("Invalid domain '{domain}': no host"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_domain_accepts_hosts() {
        assert!(validate_domain("example.com").is_ok());
        assert!(validate_domain("sub.example.co.uk").is_ok());
        assert!(validate_domain("127.0.0.1:8080").is_ok());
        assert!(validate_domain("xn--bcher-kva.example").is_ok());
    }

    #[test]
    fn test_validate_domain_rejects_garbage() {
        assert!(validate_domain("exa mple.com").is_err());
        assert!(validate_domain("").is_err());
        let err = validate_domain("bad host").expect_err("spaces are invalid");
        assert!(err.to_string().contains("Invalid domain 'bad host'"));
    }
}
