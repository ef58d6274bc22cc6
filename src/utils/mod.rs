//! Utility functions.
//!
//! This module provides:
//! - Error message sanitization
//! - CSS selector parsing utilities

pub mod sanitize;
mod selector;

pub use sanitize::sanitize_and_truncate_error_message;
pub use selector::parse_selector_unsafe;
