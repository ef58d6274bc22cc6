//! Error categorization.
//!
//! Maps library errors from the HTTP client and DNS resolver onto
//! `ProbeFailure` kinds.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};

use super::types::ProbeFailure;

/// Categorizes a `reqwest::Error` into a `ProbeFailure`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ProbeFailure {
    if error.is_timeout() {
        ProbeFailure::HttpTimeout
    } else if error.is_connect() {
        ProbeFailure::HttpConnectError
    } else if error.is_body() || error.is_decode() {
        ProbeFailure::HttpBodyError
    } else {
        ProbeFailure::HttpOtherError
    }
}

/// Categorizes a DNS `ResolveError` into a `ProbeFailure`.
pub fn categorize_resolve_error(error: &ResolveError) -> ProbeFailure {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => ProbeFailure::DnsNoRecords,
        ResolveErrorKind::Timeout => ProbeFailure::DnsTimeout,
        _ => ProbeFailure::DnsOtherError,
    }
}
