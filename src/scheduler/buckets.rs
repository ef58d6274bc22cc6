//! Outcome buckets.
//!
//! Each completed unit of work is routed into exactly one bucket of the
//! active policy, except that the resolver-only policy also copies resolving
//! domains on a parking IP into its parked bucket.

use std::fmt;
use std::ops::AddAssign;

use log::warn;

use crate::classify::{Classification, ClassificationRecord, ResolutionRecord};

/// Final state of one domain's unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<R> {
    /// The pipeline produced a record.
    Completed(R),
    /// The pipeline failed as a whole (invalid domain, deadline exceeded,
    /// or a panic). Probe failures never end up here.
    Failed { domain: String, detail: String },
}

/// A policy's set of output buckets for one batch.
pub trait BucketSet: Default + Send {
    type Record;

    /// Appends one finished unit of work to its bucket(s).
    fn route(&mut self, outcome: Outcome<Self::Record>);

    /// Per-bucket sizes.
    fn counts(&self) -> BucketCounts;
}

/// Number of records per bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BucketCounts {
    pub resolving: usize,
    pub non_resolving: usize,
    pub parked: usize,
    pub active: usize,
    pub errors: usize,
}

impl AddAssign for BucketCounts {
    fn add_assign(&mut self, other: Self) {
        self.resolving += other.resolving;
        self.non_resolving += other.non_resolving;
        self.parked += other.parked;
        self.active += other.active;
        self.errors += other.errors;
    }
}

impl fmt::Display for BucketCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} resolving | {} non-resolving | {} parked | {} active | {} errors",
            self.resolving, self.non_resolving, self.parked, self.active, self.errors
        )
    }
}

/// Buckets of the resolver-only policy.
///
/// `parked` is additive: its records are also in `resolving`.
#[derive(Debug, Default)]
pub struct ResolutionBuckets {
    pub resolving: Vec<ResolutionRecord>,
    pub non_resolving: Vec<ResolutionRecord>,
    pub parked: Vec<ResolutionRecord>,
    pub errors: Vec<ClassificationRecord>,
}

impl BucketSet for ResolutionBuckets {
    type Record = ResolutionRecord;

    fn route(&mut self, outcome: Outcome<ResolutionRecord>) {
        match outcome {
            Outcome::Completed(record) if record.resolves_dns => {
                if record.parked_ip {
                    self.parked.push(record.clone());
                }
                self.resolving.push(record);
            }
            Outcome::Completed(record) => self.non_resolving.push(record),
            Outcome::Failed { domain, detail } => {
                self.errors.push(ClassificationRecord::error(domain, detail))
            }
        }
    }

    fn counts(&self) -> BucketCounts {
        BucketCounts {
            resolving: self.resolving.len(),
            non_resolving: self.non_resolving.len(),
            parked: self.parked.len(),
            errors: self.errors.len(),
            ..Default::default()
        }
    }
}

/// Buckets of the full multi-signal policy: a partition into parked,
/// active, and error.
#[derive(Debug, Default)]
pub struct AuditBuckets {
    pub parked: Vec<ClassificationRecord>,
    pub active: Vec<ClassificationRecord>,
    pub errors: Vec<ClassificationRecord>,
}

impl BucketSet for AuditBuckets {
    type Record = ClassificationRecord;

    fn route(&mut self, outcome: Outcome<ClassificationRecord>) {
        match outcome {
            Outcome::Completed(record) => match record.classification {
                Classification::Parked => self.parked.push(record),
                Classification::Error => self.errors.push(record),
                Classification::Active => self.active.push(record),
                Classification::Resolving | Classification::NonResolving => {
                    warn!(
                        "Audit pipeline produced {} for {}, routing to errors",
                        record.classification, record.domain
                    );
                    self.errors.push(ClassificationRecord::error(
                        record.domain,
                        format!("Unexpected classification: {}", record.classification),
                    ))
                }
            },
            Outcome::Failed { domain, detail } => {
                self.errors.push(ClassificationRecord::error(domain, detail))
            }
        }
    }

    fn counts(&self) -> BucketCounts {
        BucketCounts {
            parked: self.parked.len(),
            active: self.active.len(),
            errors: self.errors.len(),
            ..Default::default()
        }
    }
}
