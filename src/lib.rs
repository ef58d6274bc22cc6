//! parked_audit library: multi-signal parked domain classification
//!
//! This library classifies large domain lists as resolving, non-resolving,
//! parked, or active. Each domain is probed over DNS, plaintext HTTP, and
//! TLS; the gathered signals are matched against known parking IPs and
//! keyword signatures, and every domain lands in exactly one output bucket.
//!
//! Two policies are available:
//! - [`run_resolve`]: one DNS query per domain, flagging parking IPs
//! - [`run_audit`]: DNS, hosting IP, HTTP body, page title, and TLS
//!   certificate common name, checked in that order
//!
//! Domain lists are processed in fixed-size batches, one batch at a time,
//! with bounded concurrency inside a batch. Each batch is written to CSV as
//! soon as it finishes, so an interrupted run can be resumed by batch index.
//!
//! # Example
//!
//! ```no_run
//! use parked_audit::{run_audit, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: std::path::PathBuf::from("extracted_urls.csv"),
//!     max_concurrency: 200,
//!     ..Default::default()
//! };
//!
//! let report = run_audit(config).await?;
//! println!("{} parked, {} active, {} errors",
//!          report.counts.parked, report.counts.active, report.counts.errors);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod classify;
pub mod config;
mod dns;
pub mod error_handling;
pub mod export;
mod fetch;
pub mod initialization;
pub mod input;
mod parse;
pub mod probe;
pub mod run;
pub mod scheduler;
mod tls;
mod utils;

// Re-export public API
pub use classify::{Classification, ClassificationRecord, ParkedReason, ResolutionRecord};
pub use config::{Config, FailOn, LogFormat, LogLevel, OutputPaths, Policy};
pub use error_handling::{ConfigError, InitializationError, InputError};
pub use input::extract_domains_plaintext;
pub use run::{run_audit, run_resolve, RunReport};
