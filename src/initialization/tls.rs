//! TLS connector initialization.

use std::sync::Arc;

use rustls::crypto::ring::default_provider;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

use crate::error_handling::InitializationError;

/// Builds the TLS connector used by the certificate probe.
///
/// Trusts the Mozilla root set from `webpki-roots`. The ring provider is
/// passed explicitly so the connector works whether or not a process-wide
/// default provider was installed.
pub fn init_tls_connector() -> Result<Arc<TlsConnector>, InitializationError> {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder_with_provider(Arc::new(default_provider()))
        .with_safe_default_protocol_versions()?
        .with_root_certificates(root_store)
        .with_no_client_auth();

    Ok(Arc::new(TlsConnector::from(Arc::new(config))))
}
