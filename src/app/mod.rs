//! Run-level logging.
//!
//! Progress within a batch, per-batch summaries, and the end-of-run
//! statistics.

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::{log_batch_progress, log_batch_summary};
pub use statistics::{print_probe_failure_statistics, print_run_summary};
