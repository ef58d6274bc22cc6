//! Configuration constants.
//!
//! This module defines the constants used as defaults throughout the application:
//! timeouts, concurrency and batch limits, output file names, and the built-in
//! signature sets used to recognize parked domains.

use std::time::Duration;

/// Maximum number of domains probed simultaneously within a batch.
pub const DEFAULT_MAX_CONCURRENCY: usize = 500;
/// Number of domains per batch. Batches are processed strictly one after another.
pub const DEFAULT_BATCH_SIZE: usize = 100_000;
/// Report progress every N completed domains within a batch.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 10_000;

// Network operation timeouts
/// Per-probe timeout for the HTTP fetch, TCP connect, and TLS handshake.
pub const PROBE_TIMEOUT_SECS: u64 = 5;
/// Lifetime of a DNS A-record query on the resolver path.
pub const DNS_TIMEOUT_SECS: u64 = 2;
/// Extra time granted to a whole per-domain pipeline on top of the sum of its
/// probe timeouts before the domain is routed to the error bucket.
pub const DOMAIN_DEADLINE_SLACK: Duration = Duration::from_secs(5);

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Response and body size limits
/// Maximum response body size in bytes (2MB).
/// Bodies larger than this are truncated; keyword matching only sees the prefix.
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

// Error message limits
/// Maximum error detail length in characters written to the error bucket.
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 2000;

/// Port used for the TLS certificate probe.
pub const TLS_PORT: u16 = 443;

// Output file names
pub const RESOLVING_OUTPUT: &str = "resolving_domains.csv";
pub const NON_RESOLVING_OUTPUT: &str = "nonresolving_domains.csv";
pub const PARKED_IP_OUTPUT: &str = "parked_ip_domains.csv";
pub const PARKED_OUTPUT: &str = "parked_domains.csv";
pub const ACTIVE_OUTPUT: &str = "active_domains.csv";
pub const ERROR_OUTPUT: &str = "error_domains.csv";

/// Name of the input column holding domains in CSV input files.
pub const DOMAIN_COLUMN: &str = "domain";

/// Hosting IPs known to serve parking or for-sale placeholder pages.
pub const DEFAULT_PARKED_IPS: &[&str] = &[
    "34.102.136.180",
    "184.168.131.241",
    "184.168.221.96",
    "184.168.131.233",
    "97.74.104.201",
    "68.178.232.100",
    "50.63.202.40",
    "64.190.62.111",
    "64.190.63.136",
    "64.190.62.22",
    "64.190.63.111",
    "185.53.177.29",
    "185.53.179.6",
    "185.53.177.30",
    "185.53.178.7",
];

/// Lowercase substrings indicating a parked page.
pub const DEFAULT_PARKED_KEYWORDS: &[&str] = &[
    "buy this domain",
    "this domain is for sale",
    "sedo",
    "bodis",
    "dan.com",
    "afternic",
    "parkingcrew",
    "parked",
    "advertising",
    "go daddy",
    "godaddy",
];
