//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - HTTP client
//! - DNS resolver
//! - TLS connector
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;
mod resolver;
mod tls;

use rustls::crypto::{ring::default_provider, CryptoProvider};

// Re-export public API
pub use client::init_client;
pub use logger::{init_logger, init_logger_with};
pub use resolver::init_resolver;
pub use tls::init_tls_connector;

/// Initializes the crypto provider for TLS operations.
///
/// Configures the process-wide default provider for `rustls`.
pub fn init_crypto_provider() {
    // The return value is ignored because reinstalling the provider is harmless
    let _ = CryptoProvider::install_default(default_provider());
}
