//! Decision policies turning gathered signals into one record per domain.
//!
//! Both policies are pure: identical signals always produce identical records.

use super::signatures::{KeywordSignatures, KnownParkedIps};
use super::types::{ClassificationRecord, DnsOutcome, ParkedReason, ResolutionRecord};
use crate::parse::extract_page_title;

/// Resolver-only policy.
///
/// A failed lookup is non-resolving with no addresses. A successful lookup is
/// resolving, and additionally flagged `parked_ip` when any resolved address
/// is a known parking IP.
pub fn classify_resolution(
    domain: &str,
    dns: DnsOutcome,
    parked_ips: &KnownParkedIps,
) -> ResolutionRecord {
    match dns {
        DnsOutcome::Resolved(ips) => {
            let parked_ip = parked_ips.any_parked(&ips);
            ResolutionRecord {
                domain: domain.to_string(),
                resolves_dns: true,
                ip_addresses: ips,
                parked_ip,
            }
        }
        DnsOutcome::Unresolved => ResolutionRecord {
            domain: domain.to_string(),
            resolves_dns: false,
            ip_addresses: Vec::new(),
            parked_ip: false,
        },
    }
}

/// Signals gathered for one domain on the audit path.
///
/// `None` marks a signal that has not been gathered (yet); rules depending on
/// it cannot fire. A gathered-but-failed probe is `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditSignals {
    pub ip: Option<String>,
    pub body: Option<String>,
    pub cert_common_name: Option<String>,
}

/// Returns the first parked rule satisfied by `signals`, checked in order:
/// parked IP, keyword in HTML body, keyword in page title, keyword in
/// certificate common name.
pub fn first_parked_reason(
    signals: &AuditSignals,
    parked_ips: &KnownParkedIps,
    keywords: &KeywordSignatures,
) -> Option<ParkedReason> {
    if let Some(ip) = &signals.ip {
        if parked_ips.contains(ip) {
            return Some(ParkedReason::ParkedIp);
        }
    }

    if let Some(body) = &signals.body {
        if keywords.matches(body) {
            return Some(ParkedReason::HtmlKeyword);
        }
        if keywords.matches(&extract_page_title(body)) {
            return Some(ParkedReason::TitleKeyword);
        }
    }

    if let Some(cn) = &signals.cert_common_name {
        if keywords.matches(cn) {
            return Some(ParkedReason::CertKeyword);
        }
    }

    None
}

/// Full multi-signal policy.
///
/// Parked with the first matching reason, otherwise active with no reason.
pub fn classify_audit(
    domain: &str,
    signals: &AuditSignals,
    parked_ips: &KnownParkedIps,
    keywords: &KeywordSignatures,
) -> ClassificationRecord {
    match first_parked_reason(signals, parked_ips, keywords) {
        Some(reason) => {
            ClassificationRecord::parked(domain.to_string(), signals.ip.clone(), reason)
        }
        None => ClassificationRecord::active(domain.to_string(), signals.ip.clone()),
    }
}
