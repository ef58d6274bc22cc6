//! DNS probes.
//!
//! Two forward lookups built on `hickory-resolver`:
//! - `resolve_dns`: every A record of a domain (resolver-only policy)
//! - `lookup_ip`: the first address of a domain (full policy)
//!
//! Neither returns an error. Resolver failures of any kind collapse to a
//! negative result and are only counted in the processing statistics.

mod resolution;

// Re-export public API
pub use resolution::{lookup_ip, resolve_dns};

#[cfg(test)]
mod tests;
