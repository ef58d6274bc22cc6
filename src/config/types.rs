//! Configuration types.
//!
//! This module defines the run configuration and the enums used for
//! command-line argument parsing.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;

use crate::classify::{KeywordSignatures, KnownParkedIps};
use crate::config::constants::*;
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// When a completed run should still exit with a failure code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once the run completes
    Never,
    /// Exit 2 if any domain landed in the error bucket
    AnyError,
}

/// Which classification policy a run applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// DNS resolution plus hosting IP reputation
    Resolve,
    /// DNS, hosting IP, HTTP content, page title, and TLS certificate signals
    Audit,
}

/// Output file locations, one per bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub resolving: PathBuf,
    pub non_resolving: PathBuf,
    /// Parked bucket of the resolver-only policy (additive to `resolving`)
    pub parked_ip: PathBuf,
    /// Parked bucket of the full policy
    pub parked: PathBuf,
    pub active: PathBuf,
    pub errors: PathBuf,
}

impl OutputPaths {
    /// Default file names placed under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            resolving: dir.join(RESOLVING_OUTPUT),
            non_resolving: dir.join(NON_RESOLVING_OUTPUT),
            parked_ip: dir.join(PARKED_IP_OUTPUT),
            parked: dir.join(PARKED_OUTPUT),
            active: dir.join(ACTIVE_OUTPUT),
            errors: dir.join(ERROR_OUTPUT),
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self::in_dir(Path::new("."))
    }
}

/// Library configuration (no CLI dependencies).
///
/// Built once before a run and shared read-only with every batch and probe.
///
/// # Examples
///
/// ```no_run
/// use parked_audit::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("extracted_urls.csv"),
///     max_concurrency: 200,
///     start_batch: 3,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read domains from
    pub input: PathBuf,

    /// Output file per bucket
    pub outputs: OutputPaths,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Maximum simultaneously outstanding domain probes within a batch
    pub max_concurrency: usize,

    /// Domains per batch
    pub batch_size: usize,

    /// Zero-based batch index to start from; earlier batches are skipped
    pub start_batch: usize,

    /// Report progress every N completions within a batch
    pub progress_interval: usize,

    /// Timeout for the HTTP fetch, TCP connect, and TLS handshake
    pub probe_timeout: Duration,

    /// Lifetime of a DNS query
    pub dns_timeout: Duration,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Known parking IPs
    pub parked_ips: KnownParkedIps,

    /// Parked page keyword signatures
    pub keywords: KeywordSignatures,

    /// Exit code policy for completed runs
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("extracted_urls.csv"),
            outputs: OutputPaths::default(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            batch_size: DEFAULT_BATCH_SIZE,
            start_batch: 0,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            probe_timeout: Duration::from_secs(PROBE_TIMEOUT_SECS),
            dns_timeout: Duration::from_secs(DNS_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            parked_ips: KnownParkedIps::default(),
            keywords: KeywordSignatures::default(),
            fail_on: FailOn::Never,
        }
    }
}

impl Config {
    /// Checks the numeric limits before a run starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        if self.max_concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if self.progress_interval == 0 {
            return Err(ConfigError::ZeroProgressInterval);
        }
        if self.probe_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout("probe"));
        }
        if self.dns_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout("DNS"));
        }
        Ok(())
    }

    /// Upper bound for one domain's whole pipeline under `policy`.
    ///
    /// The resolver path runs one DNS query. The audit path runs a DNS lookup,
    /// an HTTP fetch, a TCP connect, and a TLS handshake, each with its own
    /// timeout.
    pub fn domain_deadline(&self, policy: Policy) -> Duration {
        let probes = match policy {
            Policy::Resolve => self.dns_timeout,
            Policy::Audit => self.dns_timeout + self.probe_timeout * 3,
        };
        probes + DOMAIN_DEADLINE_SLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_concurrency, 500);
        assert_eq!(config.batch_size, 100_000);
        assert_eq!(config.start_batch, 0);
        assert_eq!(config.progress_interval, 10_000);
        assert_eq!(config.probe_timeout, Duration::from_secs(5));
        assert_eq!(config.dns_timeout, Duration::from_secs(2));
        assert_eq!(config.fail_on, FailOn::Never);
        assert_eq!(config.parked_ips.len(), 15);
        assert_eq!(config.keywords.len(), 11);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let config = Config {
            batch_size: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroBatchSize));

        let config = Config {
            max_concurrency: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroConcurrency));

        let config = Config {
            progress_interval: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroProgressInterval));

        let config = Config {
            probe_timeout: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeout("probe")));
    }

    #[test]
    fn test_domain_deadline_covers_all_probes() {
        let config = Config::default();
        assert_eq!(config.domain_deadline(Policy::Resolve), Duration::from_secs(7));
        assert_eq!(config.domain_deadline(Policy::Audit), Duration::from_secs(22));
    }

    #[test]
    fn test_output_paths_in_dir() {
        let outputs = OutputPaths::in_dir(Path::new("/tmp/out"));
        assert_eq!(outputs.parked, PathBuf::from("/tmp/out/parked_domains.csv"));
        assert_eq!(
            outputs.non_resolving,
            PathBuf::from("/tmp/out/nonresolving_domains.csv")
        );
        assert_ne!(outputs.parked, outputs.parked_ip);
    }
}
