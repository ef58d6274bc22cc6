//! HTTP client initialization.

use std::sync::Arc;

use crate::config::Config;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used by the plaintext fetch probe.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Connect and overall request timeouts of `probe_timeout`
/// - Default redirect policy (follows up to 10 hops)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(config.probe_timeout)
        .connect_timeout(config.probe_timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
