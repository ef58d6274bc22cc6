//! Per-policy bucket sinks.

use anyhow::Result;
use log::debug;

use crate::config::OutputPaths;
use crate::scheduler::{AuditBuckets, ResolutionBuckets};

use super::csv::{write_rows, AuditRow, ErrorRow, WriteMode};

/// Persists one finished batch.
///
/// Called once per batch, strictly in batch order.
pub trait BatchSink<B> {
    fn persist(&mut self, batch_index: usize, buckets: &B) -> Result<()>;
}

/// Writes audit buckets to the parked, active, and error files.
#[derive(Debug, Clone)]
pub struct CsvAuditSink {
    paths: OutputPaths,
}

impl CsvAuditSink {
    pub fn new(paths: OutputPaths) -> Self {
        Self { paths }
    }
}

impl BatchSink<AuditBuckets> for CsvAuditSink {
    fn persist(&mut self, batch_index: usize, buckets: &AuditBuckets) -> Result<()> {
        let mode = WriteMode::for_batch(batch_index);
        let parked = write_rows(
            &self.paths.parked,
            mode,
            buckets.parked.iter().map(AuditRow::from),
        )?;
        let active = write_rows(
            &self.paths.active,
            mode,
            buckets.active.iter().map(AuditRow::from),
        )?;
        let errors = write_rows(
            &self.paths.errors,
            mode,
            buckets.errors.iter().map(ErrorRow::from),
        )?;
        debug!(
            "Batch {} persisted ({mode:?}): {parked} parked, {active} active, {errors} errors",
            batch_index + 1
        );
        Ok(())
    }
}

/// Writes resolver buckets to the resolving, non-resolving, parked-IP, and
/// error files.
#[derive(Debug, Clone)]
pub struct CsvResolutionSink {
    paths: OutputPaths,
}

impl CsvResolutionSink {
    pub fn new(paths: OutputPaths) -> Self {
        Self { paths }
    }
}

impl BatchSink<ResolutionBuckets> for CsvResolutionSink {
    fn persist(&mut self, batch_index: usize, buckets: &ResolutionBuckets) -> Result<()> {
        let mode = WriteMode::for_batch(batch_index);
        let resolving = write_rows(&self.paths.resolving, mode, buckets.resolving.iter())?;
        let non_resolving =
            write_rows(&self.paths.non_resolving, mode, buckets.non_resolving.iter())?;
        let parked = write_rows(&self.paths.parked_ip, mode, buckets.parked.iter())?;
        let errors = write_rows(
            &self.paths.errors,
            mode,
            buckets.errors.iter().map(ErrorRow::from),
        )?;
        debug!(
            "Batch {} persisted ({mode:?}): {resolving} resolving, {non_resolving} non-resolving, \
             {parked} parked IP, {errors} errors",
            batch_index + 1
        );
        Ok(())
    }
}
