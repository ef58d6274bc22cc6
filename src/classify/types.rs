//! Probe outcomes and classification records.

use std::fmt;

use serde::Serialize;
use strum_macros::{AsRefStr, EnumIter};

/// Result of a forward A-record lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsOutcome {
    /// The name resolved to at least one address.
    Resolved(Vec<String>),
    /// Any resolver failure: NXDOMAIN, SERVFAIL, timeout, malformed response,
    /// or an answer with no A records.
    Unresolved,
}

/// Result of a plaintext HTTP GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Fetched(String),
    Failed,
}

impl FetchOutcome {
    /// The fetched body, or an empty string when the fetch failed.
    pub fn into_body(self) -> String {
        match self {
            FetchOutcome::Fetched(body) => body,
            FetchOutcome::Failed => String::new(),
        }
    }
}

/// Result of the TLS certificate subject probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertOutcome {
    Subject(String),
    Failed,
}

impl CertOutcome {
    /// The subject common name, or an empty string when the probe failed.
    pub fn into_common_name(self) -> String {
        match self {
            CertOutcome::Subject(cn) => cn,
            CertOutcome::Failed => String::new(),
        }
    }
}

/// Final category assigned to a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
pub enum Classification {
    Resolving,
    NonResolving,
    Parked,
    Active,
    Error,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// The rule that marked a domain as parked, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ParkedReason {
    ParkedIp,
    HtmlKeyword,
    TitleKeyword,
    CertKeyword,
}

impl ParkedReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParkedReason::ParkedIp => "Matched parked IP",
            ParkedReason::HtmlKeyword => "Matched parked keyword in HTML",
            ParkedReason::TitleKeyword => "Matched keyword in page title",
            ParkedReason::CertKeyword => "Matched keyword in SSL cert",
        }
    }
}

impl fmt::Display for ParkedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the resolver-only policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionRecord {
    pub domain: String,
    pub resolves_dns: bool,
    #[serde(serialize_with = "serialize_comma_joined")]
    pub ip_addresses: Vec<String>,
    pub parked_ip: bool,
}

impl ResolutionRecord {
    pub fn classification(&self) -> Classification {
        if self.resolves_dns {
            Classification::Resolving
        } else {
            Classification::NonResolving
        }
    }
}

fn serialize_comma_joined<S>(ips: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&ips.join(","))
}

/// Output of the full multi-signal policy, or an error record.
///
/// Created once per domain and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRecord {
    pub domain: String,
    pub ip: Option<String>,
    pub classification: Classification,
    pub reason: Option<ParkedReason>,
    pub error_detail: Option<String>,
}

impl ClassificationRecord {
    pub fn parked(domain: String, ip: Option<String>, reason: ParkedReason) -> Self {
        Self {
            domain,
            ip,
            classification: Classification::Parked,
            reason: Some(reason),
            error_detail: None,
        }
    }

    pub fn active(domain: String, ip: Option<String>) -> Self {
        Self {
            domain,
            ip,
            classification: Classification::Active,
            reason: None,
            error_detail: None,
        }
    }

    pub fn error(domain: String, detail: String) -> Self {
        Self {
            domain,
            ip: None,
            classification: Classification::Error,
            reason: None,
            error_detail: Some(detail),
        }
    }
}
