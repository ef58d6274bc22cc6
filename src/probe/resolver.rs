//! Resolver-only pipeline: one DNS query per domain.

use std::future::Future;
use std::sync::Arc;

use crate::classify::{classify_resolution, ResolutionRecord};
use crate::dns::resolve_dns;

use super::{DomainProbe, ProbeContext};

/// Resolves every A record and checks them against the known parking IPs.
pub struct ResolverProbe {
    ctx: ProbeContext,
}

impl ResolverProbe {
    pub fn new(ctx: ProbeContext) -> Self {
        Self { ctx }
    }
}

impl DomainProbe for ResolverProbe {
    type Record = ResolutionRecord;

    fn probe(
        &self,
        domain: Arc<str>,
    ) -> impl Future<Output = anyhow::Result<ResolutionRecord>> + Send {
        async move {
            let ctx = &self.ctx;
            let dns = resolve_dns(&domain, &ctx.resolver, ctx.config.dns_timeout, &ctx.stats).await;
            Ok(classify_resolution(&domain, dns, &ctx.config.parked_ips))
        }
    }
}
