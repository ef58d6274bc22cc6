//! Plain-text to CSV extraction.

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;
use log::info;

use crate::config::DOMAIN_COLUMN;

use super::load::read_plain_lines;

/// Converts a plain-text domain list into a one-column CSV.
///
/// Keeps the first comma-separated field of every non-blank line and writes
/// it under a `domain` header, ready for `load_domains`.
///
/// # Returns
///
/// The number of domains written.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be written.
pub fn extract_domains_plaintext(input: &Path, output: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let domains = read_plain_lines(&content);
    info!("📥 Read {} domains from {}", domains.len(), input.display());

    let mut writer = Writer::from_path(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    writer.write_record([DOMAIN_COLUMN])?;
    for domain in &domains {
        writer.write_record([domain])?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", output.display()))?;

    info!("✅ Extracted {} domains to {}", domains.len(), output.display());
    Ok(domains.len())
}
