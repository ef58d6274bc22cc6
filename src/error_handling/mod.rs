//! Error handling and processing statistics.
//!
//! This module provides:
//! - Typed errors for initialization, configuration, and input loading
//! - Probe failure kinds and their categorization from library errors
//! - Thread-safe probe failure statistics
//!
//! Probe failures never abort a run. They degrade to negative signals and
//! are only counted; the run-level errors here are for setup problems.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_resolve_error};
pub use stats::ProcessingStats;
pub use types::{ConfigError, InitializationError, InputError, ProbeFailure};
