//! Per-domain pipelines.
//!
//! A `DomainProbe` runs every signal probe a policy needs for one domain and
//! reduces the signals to one record. The scheduler treats a probe call as a
//! single unit of work; nothing of a domain is visible until it returns.

mod audit;
mod context;
mod resolver;

use std::future::Future;
use std::sync::Arc;

// Re-export public API
pub use audit::AuditProbe;
pub use context::ProbeContext;
pub use resolver::ResolverProbe;

/// One policy's per-domain pipeline.
///
/// Implementations must not fail for network reasons: probe failures are
/// negative signals. `Err` is reserved for domains the pipeline cannot
/// process at all, which the scheduler routes to the error bucket.
pub trait DomainProbe: Send + Sync + 'static {
    type Record: Send + 'static;

    fn probe(&self, domain: Arc<str>)
        -> impl Future<Output = anyhow::Result<Self::Record>> + Send;
}
