//! Domain classification: data model, signature sets, and decision policies.
//!
//! Two policies are supported:
//! - **Resolver-only**: DNS resolution plus hosting IP reputation. Every domain
//!   is resolving or non-resolving; resolving domains on a known parking IP are
//!   additionally reported as parked.
//! - **Full multi-signal**: hosting IP, HTML body keywords, page title keywords,
//!   and TLS certificate common name keywords, checked in that order. The first
//!   match classifies the domain as parked; otherwise it is active.

mod policy;
mod signatures;
mod types;

// Re-export public API
pub use policy::{classify_audit, classify_resolution, first_parked_reason, AuditSignals};
pub use signatures::{KeywordSignatures, KnownParkedIps};
pub use types::{
    CertOutcome, Classification, ClassificationRecord, DnsOutcome, FetchOutcome, ParkedReason,
    ResolutionRecord,
};
