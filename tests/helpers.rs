// Shared test helpers: scripted pipelines and output readers.

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use parked_audit::classify::{ClassificationRecord, ParkedReason};
use parked_audit::probe::DomainProbe;

/// Classifies by name so that tests need no network.
///
/// `parked*` is parked by keyword, `panic*` panics, `bad*` is rejected as an
/// invalid domain, and everything else is active.
pub struct NamedProbe;

impl DomainProbe for NamedProbe {
    type Record = ClassificationRecord;

    fn probe(
        &self,
        domain: Arc<str>,
    ) -> impl Future<Output = anyhow::Result<ClassificationRecord>> + Send {
        async move {
            if domain.starts_with("panic") {
                panic!("scripted panic");
            }
            if domain.starts_with("bad") {
                anyhow::bail!("Invalid domain '{domain}'");
            }
            if domain.starts_with("parked") {
                return Ok(ClassificationRecord::parked(
                    domain.to_string(),
                    Some("64.190.63.111".to_string()),
                    ParkedReason::HtmlKeyword,
                ));
            }
            Ok(ClassificationRecord::active(
                domain.to_string(),
                Some("93.184.216.34".to_string()),
            ))
        }
    }
}

/// Lines of a CSV output file.
#[allow(dead_code)] // Used by other test files
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
        .lines()
        .map(str::to_string)
        .collect()
}

/// `count` domain names, every fifth one parked.
#[allow(dead_code)] // Used by other test files
pub fn domain_list(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            if i % 5 == 0 {
                format!("parked{i:04}.example")
            } else {
                format!("site{i:04}.example")
            }
        })
        .collect()
}
