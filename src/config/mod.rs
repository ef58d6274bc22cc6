//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, default signature sets)
//! - The immutable run configuration
//! - CLI option value types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, FailOn, LogFormat, LogLevel, OutputPaths, Policy};
