//! Shared resources for per-domain pipelines.

use std::sync::Arc;

use hickory_resolver::TokioAsyncResolver;
use tokio_rustls::TlsConnector;

use crate::config::Config;
use crate::error_handling::ProcessingStats;
use crate::initialization::{init_client, init_resolver, init_tls_connector};

/// Resources shared read-only by every concurrent probe of a run.
///
/// Cloning is cheap: every field is reference-counted.
#[derive(Clone)]
pub struct ProbeContext {
    /// HTTP client for the plaintext fetch
    pub client: Arc<reqwest::Client>,
    /// DNS resolver for forward lookups
    pub resolver: Arc<TokioAsyncResolver>,
    /// TLS connector for the certificate probe
    pub tls: Arc<TlsConnector>,
    /// Run configuration, including the signature sets
    pub config: Arc<Config>,
    /// Probe failure counters
    pub stats: Arc<ProcessingStats>,
}

impl ProbeContext {
    /// Initializes the network resources described by `config`.
    pub fn new(config: Arc<Config>, stats: Arc<ProcessingStats>) -> anyhow::Result<Self> {
        let client = init_client(&config)?;
        let resolver = init_resolver(config.dns_timeout);
        let tls = init_tls_connector()?;
        Ok(Self {
            client,
            resolver,
            tls,
            config,
            stats,
        })
    }
}
