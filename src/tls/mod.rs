//! TLS certificate subject probe.
//!
//! Connects to port 443, performs a TLS handshake with SNI set to the domain
//! and the default (webpki) trust roots, and extracts the Common Name of the
//! leaf certificate's subject.
//!
//! Uses `tokio-rustls` for the async handshake and `x509-parser` for
//! certificate parsing. Every failure degrades to `CertOutcome::Failed`.

use std::time::Duration;

use log::debug;
use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;

use crate::classify::CertOutcome;
use crate::config::TLS_PORT;
use crate::error_handling::{ProbeFailure, ProcessingStats};

/// Retrieves the subject Common Name of `domain`'s TLS certificate.
///
/// The TCP connect and the TLS handshake each get `timeout`.
pub async fn fetch_tls_certificate_subject_cn(
    domain: &str,
    connector: &TlsConnector,
    timeout: Duration,
    stats: &ProcessingStats,
) -> CertOutcome {
    match certificate_subject_cn(domain, TLS_PORT, connector, timeout).await {
        Ok(cn) => {
            debug!("Certificate CN for {domain}: {cn}");
            CertOutcome::Subject(cn)
        }
        Err(failure) => {
            debug!("TLS probe failed for {domain}: {failure}");
            stats.increment(failure);
            CertOutcome::Failed
        }
    }
}

async fn certificate_subject_cn(
    domain: &str,
    port: u16,
    connector: &TlsConnector,
    timeout: Duration,
) -> Result<String, ProbeFailure> {
    let server_name = ServerName::try_from(domain.to_string())
        .map_err(|_| ProbeFailure::TlsInvalidServerName)?;

    let sock = match tokio::time::timeout(timeout, TcpStream::connect((domain, port))).await {
        Ok(Ok(sock)) => sock,
        Ok(Err(_)) => return Err(ProbeFailure::TlsConnectError),
        Err(_) => return Err(ProbeFailure::TlsConnectTimeout),
    };

    let tls_stream = match tokio::time::timeout(timeout, connector.connect(server_name, sock)).await
    {
        Ok(Ok(stream)) => stream,
        Ok(Err(_)) => return Err(ProbeFailure::TlsHandshakeError),
        Err(_) => return Err(ProbeFailure::TlsHandshakeTimeout),
    };

    let certs = tls_stream
        .get_ref()
        .1
        .peer_certificates()
        .ok_or(ProbeFailure::TlsNoCertificate)?;
    let leaf = certs.first().ok_or(ProbeFailure::TlsNoCertificate)?;

    subject_common_name(leaf.as_ref())
}

/// Extracts the first subject Common Name from a DER-encoded certificate.
fn subject_common_name(der: &[u8]) -> Result<String, ProbeFailure> {
    let (_, cert) = x509_parser::parse_x509_certificate(der)
        .map_err(|_| ProbeFailure::TlsCertificateParseError)?;

    let cn = cert
        .subject()
        .iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .map(str::to_string)
        .ok_or(ProbeFailure::TlsMissingCommonName);
    cn
}
