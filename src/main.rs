//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `parked_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use parked_audit::classify::{KeywordSignatures, KnownParkedIps};
use parked_audit::config::{
    DEFAULT_BATCH_SIZE, DEFAULT_MAX_CONCURRENCY, DEFAULT_PROGRESS_INTERVAL, DEFAULT_USER_AGENT,
    DNS_TIMEOUT_SECS, PROBE_TIMEOUT_SECS,
};
use parked_audit::initialization::{init_crypto_provider, init_logger, init_logger_with};
use parked_audit::{
    extract_domains_plaintext, run_audit, run_resolve, Config, ConfigError, FailOn, InputError,
    LogFormat, LogLevel, OutputPaths, Policy, RunReport,
};

const EXIT_FATAL: i32 = 1;
const EXIT_FAIL_ON: i32 = 2;
const EXIT_INPUT: i32 = 3;
const EXIT_CONFIG: i32 = 4;

/// Classifies domain lists as resolving, non-resolving, parked, or active.
///
/// # Examples
///
/// ```bash
/// # Full multi-signal audit
/// parked_audit audit extracted_urls.csv --output-dir ./out
///
/// # DNS-only pass, resuming at the fourth batch
/// parked_audit resolve extracted_urls.csv --start-batch 3
///
/// # Turn a plain-text dump into a domain CSV
/// parked_audit extract "701 category.rtf" --output extracted_urls.csv
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "parked_audit",
    version,
    about = "Classifies domain lists as resolving, non-resolving, parked, or active."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Full multi-signal audit (DNS, hosting IP, HTTP content, TLS certificate)
    Audit(RunArgs),
    /// Resolver-only pass (DNS and hosting IP)
    Resolve(RunArgs),
    /// Extract the first field of each line of a plain-text file into a domain CSV
    Extract(ExtractArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// CSV with a `domain` column, or plain text with one domain per line
    #[arg(value_parser)]
    input: PathBuf,

    /// Directory for the per-bucket CSV files
    #[arg(long, env = "PARKED_AUDIT_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Maximum simultaneously probed domains within a batch
    #[arg(long, env = "PARKED_AUDIT_MAX_CONCURRENCY", default_value_t = DEFAULT_MAX_CONCURRENCY)]
    max_concurrency: usize,

    /// Domains per batch
    #[arg(long, env = "PARKED_AUDIT_BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// HTTP fetch, TCP connect, and TLS handshake timeout in seconds
    #[arg(long, env = "PARKED_AUDIT_TIMEOUT_SECONDS", default_value_t = PROBE_TIMEOUT_SECS)]
    timeout_seconds: u64,

    /// DNS query lifetime in seconds
    #[arg(long, env = "PARKED_AUDIT_DNS_TIMEOUT_SECONDS", default_value_t = DNS_TIMEOUT_SECS)]
    dns_timeout_seconds: u64,

    /// Zero-based batch index to resume from
    #[arg(long, env = "PARKED_AUDIT_START_BATCH", default_value_t = 0)]
    start_batch: usize,

    /// Log progress every N completed domains
    #[arg(long, env = "PARKED_AUDIT_PROGRESS_INTERVAL", default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: usize,

    /// File of known parking IPs, one per line (replaces the built-in list)
    #[arg(long, env = "PARKED_AUDIT_PARKED_IPS")]
    parked_ips: Option<PathBuf>,

    /// File of parked page keywords, one per line (replaces the built-in list)
    #[arg(long, env = "PARKED_AUDIT_KEYWORDS")]
    keywords: Option<PathBuf>,

    /// HTTP User-Agent header value
    #[arg(long, env = "PARKED_AUDIT_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, env = "PARKED_AUDIT_LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, env = "PARKED_AUDIT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// Exit with code 2 when the run completes with domains in the error bucket
    #[arg(long, env = "PARKED_AUDIT_FAIL_ON", value_enum, default_value_t = FailOn::Never)]
    fail_on: FailOn,
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Plain-text file with one domain per line
    #[arg(value_parser)]
    input: PathBuf,

    /// CSV file to write
    #[arg(long, default_value = "extracted_urls.csv")]
    output: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

impl RunArgs {
    fn into_config(self) -> Result<Config> {
        let parked_ips = match &self.parked_ips {
            Some(path) => KnownParkedIps::from_file(path)?,
            None => KnownParkedIps::default(),
        };
        let keywords = match &self.keywords {
            Some(path) => KeywordSignatures::from_file(path)?,
            None => KeywordSignatures::default(),
        };

        Ok(Config {
            input: self.input,
            outputs: OutputPaths::in_dir(&self.output_dir),
            log_level: self.log_level,
            log_format: self.log_format,
            max_concurrency: self.max_concurrency,
            batch_size: self.batch_size,
            start_batch: self.start_batch,
            progress_interval: self.progress_interval,
            probe_timeout: Duration::from_secs(self.timeout_seconds),
            dns_timeout: Duration::from_secs(self.dns_timeout_seconds),
            user_agent: self.user_agent,
            parked_ips,
            keywords,
            fail_on: self.fail_on,
        })
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if it exists)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let code = match cli.command {
        Command::Audit(args) => run(args, Policy::Audit).await,
        Command::Resolve(args) => run(args, Policy::Resolve).await,
        Command::Extract(args) => extract(args),
    };
    process::exit(code);
}

async fn run(args: RunArgs, policy: Policy) -> i32 {
    let output_dir = args.output_dir.clone();
    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("parked_audit error: {e:#}");
            return EXIT_CONFIG;
        }
    };
    if let Err(e) = init_logger(&config) {
        eprintln!("parked_audit error: failed to initialize logger: {e}");
        return EXIT_FATAL;
    }
    init_crypto_provider();
    let fail_on = config.fail_on;

    let result = match policy {
        Policy::Audit => run_audit(config).await,
        Policy::Resolve => run_resolve(config).await,
    };

    match result {
        Ok(report) => {
            print_summary(&report, &output_dir);
            if report.should_fail(fail_on) {
                EXIT_FAIL_ON
            } else {
                0
            }
        }
        Err(e) => {
            eprintln!("parked_audit error: {e:#}");
            exit_code_for_error(&e)
        }
    }
}

fn extract(args: ExtractArgs) -> i32 {
    if let Err(e) = init_logger_with(args.log_level.into(), LogFormat::Plain) {
        eprintln!("parked_audit error: failed to initialize logger: {e}");
        return EXIT_FATAL;
    }
    match extract_domains_plaintext(&args.input, &args.output)
        .with_context(|| format!("Failed to extract domains from {}", args.input.display()))
    {
        Ok(count) => {
            println!("✅ Extracted {count} domains to {}", args.output.display());
            0
        }
        Err(e) => {
            eprintln!("parked_audit error: {e:#}");
            EXIT_INPUT
        }
    }
}

fn print_summary(report: &RunReport, output_dir: &std::path::Path) {
    println!(
        "✅ Processed {} domain{} in {:.1}s ({}/{} batches from batch {}): {}",
        report.total_domains,
        if report.total_domains == 1 { "" } else { "s" },
        report.elapsed_seconds,
        report.batches_processed,
        report.total_batches,
        report.start_batch,
        report.counts
    );
    println!("Results saved in {}", output_dir.display());
}

/// Maps a failed run to its exit code.
fn exit_code_for_error(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<InputError>().is_some() {
        EXIT_INPUT
    } else if error.downcast_ref::<ConfigError>().is_some() {
        EXIT_CONFIG
    } else {
        EXIT_FATAL
    }
}
