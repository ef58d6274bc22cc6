//! Error type definitions.
//!
//! This module defines the typed errors for setup failures and the probe
//! failure kinds tracked in processing statistics.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error building the TLS client configuration.
    #[error("TLS configuration error: {0}")]
    TlsConfigError(#[from] rustls::Error),
}

/// Invalid run configuration, detected before any probing starts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("batch size must be greater than zero")]
    ZeroBatchSize,

    #[error("max concurrency must be greater than zero")]
    ZeroConcurrency,

    #[error("progress interval must be greater than zero")]
    ZeroProgressInterval,

    #[error("{0} timeout must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Errors reading the domain list.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read input file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("No domains found in {}", .0.display())]
    Empty(PathBuf),
}

/// Kinds of probe failure.
///
/// Probe failures are never errors of the run: each one degrades to a
/// negative signal for its domain. They are counted so the end-of-run report
/// shows why signals were missing. The last three kinds are the exception:
/// they send a domain to the error bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ProbeFailure {
    // DNS
    DnsNoRecords,
    DnsTimeout,
    DnsOtherError,
    // HTTP
    HttpTimeout,
    HttpConnectError,
    HttpBodyError,
    HttpOtherError,
    HttpBodyTruncated,
    // TLS
    TlsInvalidServerName,
    TlsConnectError,
    TlsConnectTimeout,
    TlsHandshakeError,
    TlsHandshakeTimeout,
    TlsNoCertificate,
    TlsCertificateParseError,
    TlsMissingCommonName,
    // Whole-domain failures (error bucket)
    InvalidDomain,
    DomainTimeout,
    TaskPanic,
}

impl std::fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ProbeFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeFailure::DnsNoRecords => "DNS no records / NXDOMAIN",
            ProbeFailure::DnsTimeout => "DNS timeout",
            ProbeFailure::DnsOtherError => "DNS other error",
            ProbeFailure::HttpTimeout => "HTTP timeout",
            ProbeFailure::HttpConnectError => "HTTP connect error",
            ProbeFailure::HttpBodyError => "HTTP body error",
            ProbeFailure::HttpOtherError => "HTTP other error",
            ProbeFailure::HttpBodyTruncated => "HTTP body truncated",
            ProbeFailure::TlsInvalidServerName => "TLS invalid server name",
            ProbeFailure::TlsConnectError => "TLS connect error",
            ProbeFailure::TlsConnectTimeout => "TLS connect timeout",
            ProbeFailure::TlsHandshakeError => "TLS handshake error",
            ProbeFailure::TlsHandshakeTimeout => "TLS handshake timeout",
            ProbeFailure::TlsNoCertificate => "TLS no peer certificate",
            ProbeFailure::TlsCertificateParseError => "TLS certificate parse error",
            ProbeFailure::TlsMissingCommonName => "TLS certificate without CN",
            ProbeFailure::InvalidDomain => "Invalid domain",
            ProbeFailure::DomainTimeout => "Domain processing timeout",
            ProbeFailure::TaskPanic => "Task panicked",
        }
    }

    /// True for failures that route the whole domain to the error bucket.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            ProbeFailure::InvalidDomain | ProbeFailure::DomainTimeout | ProbeFailure::TaskPanic
        )
    }
}
