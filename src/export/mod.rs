//! Bucket output.
//!
//! Each policy's buckets are written to one CSV file per bucket, batch by
//! batch, so that progress survives a crash and a run can be resumed.

mod csv;
mod sink;

// Re-export public API
pub use csv::{write_rows, AuditRow, CsvRow, ErrorRow, WriteMode};
pub use sink::{BatchSink, CsvAuditSink, CsvResolutionSink};
