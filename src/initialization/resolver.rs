//! DNS resolver initialization.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

/// Initializes the DNS resolver for A-record lookups.
///
/// Queries go to the system's configured name servers (`/etc/resolv.conf`
/// on Unix); hickory's built-in upstream is used only when the system
/// configuration cannot be read or lists no servers. The resolver is shared
/// by every concurrent probe.
pub fn init_resolver(timeout: Duration) -> Arc<TokioAsyncResolver> {
    Arc::new(TokioAsyncResolver::tokio(upstream_config(), resolver_opts(timeout)))
}

fn upstream_config() -> ResolverConfig {
    match read_system_conf() {
        Ok((config, _)) if !config.name_servers().is_empty() => {
            debug!("Using {} system name servers", config.name_servers().len());
            config
        }
        Ok(_) => {
            warn!("System resolver configuration lists no name servers, using default upstream");
            ResolverConfig::default()
        }
        Err(e) => {
            warn!("Failed to read system resolver configuration ({e}), using default upstream");
            ResolverConfig::default()
        }
    }
}

/// Options for the probe resolver.
///
/// `timeout` bounds the whole lookup, so a single attempt is made per query.
/// Lookups are IPv4-only with `ndots = 0` so no search domain is appended.
fn resolver_opts(timeout: Duration) -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = 1;
    opts.ndots = 0;
    opts.ip_strategy = LookupIpStrategy::Ipv4Only;
    opts
}
