//! Append-mode CSV writing.
//!
//! One file per bucket. Rows are flat `serde` structs; the header is written
//! explicitly so that a bucket with no rows still produces a well-formed file.

use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;

use crate::classify::{ClassificationRecord, ResolutionRecord};

/// Label written in the `reason` column of active rows.
const ACTIVE_REASON: &str = "Active";

/// How a batch opens its bucket files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create or truncate, then write the header.
    Truncate,
    /// Append rows; the header is only written if the file is new or empty.
    Append,
}

impl WriteMode {
    /// Batch 0 starts the output over; every later batch appends, so a run
    /// resumed at batch N extends the output of batches before N.
    pub fn for_batch(batch_index: usize) -> Self {
        if batch_index == 0 {
            WriteMode::Truncate
        } else {
            WriteMode::Append
        }
    }
}

/// A flat CSV row with a fixed header.
pub trait CsvRow: Serialize {
    const HEADERS: &'static [&'static str];
}

/// Row of the parked and active buckets of the audit policy.
#[derive(Debug, Serialize)]
pub struct AuditRow<'a> {
    pub domain: &'a str,
    pub ip: &'a str,
    pub reason: &'a str,
}

impl CsvRow for AuditRow<'_> {
    const HEADERS: &'static [&'static str] = &["domain", "ip", "reason"];
}

impl<'a> From<&'a ClassificationRecord> for AuditRow<'a> {
    fn from(record: &'a ClassificationRecord) -> Self {
        AuditRow {
            domain: &record.domain,
            ip: record.ip.as_deref().unwrap_or(""),
            reason: record.reason.map(|r| r.as_str()).unwrap_or(ACTIVE_REASON),
        }
    }
}

/// Row of the error bucket of either policy.
#[derive(Debug, Serialize)]
pub struct ErrorRow<'a> {
    pub domain: &'a str,
    pub error: &'a str,
}

impl CsvRow for ErrorRow<'_> {
    const HEADERS: &'static [&'static str] = &["domain", "error"];
}

impl<'a> From<&'a ClassificationRecord> for ErrorRow<'a> {
    fn from(record: &'a ClassificationRecord) -> Self {
        ErrorRow {
            domain: &record.domain,
            error: record.error_detail.as_deref().unwrap_or(""),
        }
    }
}

impl CsvRow for &ResolutionRecord {
    const HEADERS: &'static [&'static str] =
        &["domain", "resolves_dns", "ip_addresses", "parked_ip"];
}

/// Writes `rows` to `path` according to `mode`.
///
/// # Returns
///
/// The number of rows written.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a row cannot be written.
pub fn write_rows<T, I>(path: &Path, mode: WriteMode, rows: I) -> Result<usize>
where
    T: CsvRow,
    I: IntoIterator<Item = T>,
{
    let (file, needs_header) = open_for(path, mode)
        .with_context(|| format!("Failed to open output file: {}", path.display()))?;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    if needs_header {
        writer
            .write_record(T::HEADERS)
            .with_context(|| format!("Failed to write CSV header to {}", path.display()))?;
    }

    let mut count = 0usize;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write CSV row to {}", path.display()))?;
        count += 1;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(count)
}

fn open_for(path: &Path, mode: WriteMode) -> std::io::Result<(File, bool)> {
    match mode {
        WriteMode::Truncate => Ok((File::create(path)?, true)),
        WriteMode::Append => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let is_empty = file.metadata()?.len() == 0;
            Ok((file, is_empty))
        }
    }
}
