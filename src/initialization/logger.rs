//! Logger initialization.
//!
//! `env_logger` with two line formats: a colored plain line for terminals and
//! one JSON object per line for log shippers. Third-party targets on the probe
//! path are clamped so a run over unreachable hosts stays readable.

use std::io::Write;

use colored::{Color, Colorize};
use log::{Level, LevelFilter, Record};

use crate::config::{Config, LogFormat};
use crate::error_handling::InitializationError;

/// Upper bounds for chatty dependencies, applied after the user's level.
///
/// The resolver and TLS stacks warn on every truncated DNS answer or
/// aborted handshake, which are ordinary outcomes for parked and dead hosts.
const PROBE_STACK_CLAMPS: &[(&str, LevelFilter)] = &[
    ("hickory_proto", LevelFilter::Error),
    ("hickory_resolver", LevelFilter::Error),
    ("rustls", LevelFilter::Error),
    ("tokio_rustls", LevelFilter::Error),
    ("reqwest", LevelFilter::Warn),
    ("hyper_util", LevelFilter::Warn),
    ("html5ever", LevelFilter::Error),
];

/// Initializes the logger from the run configuration.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger(config: &Config) -> Result<(), InitializationError> {
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
}

/// Initializes the logger with an explicit level and format.
///
/// `RUST_LOG` is read first; `level` then applies to this crate and to every
/// target without a clamp. Clamped targets never log above their bound, even
/// at `--log-level trace`.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for (target, bound) in PROBE_STACK_CLAMPS {
        builder.filter_module(target, clamp(level, *bound));
    }

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| writeln!(buf, "{}", json_line(record)));
        }
        LogFormat::Plain => {
            colored::control::set_override(true);
            builder.format(|buf, record| writeln!(buf, "{}", plain_line(record)));
        }
    }

    builder.try_init().map_err(InitializationError::from)
}

fn clamp(level: LevelFilter, bound: LevelFilter) -> LevelFilter {
    level.min(bound)
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug | Level::Trace => Color::BrightBlack,
    }
}

fn plain_line(record: &Record<'_>) -> String {
    format!(
        "{:<5} {} {}",
        record.level().as_str().color(level_color(record.level())),
        record.target().dimmed(),
        record.args()
    )
}

fn json_line(record: &Record<'_>) -> String {
    serde_json::json!({
        "ts": chrono::Utc::now().timestamp_millis(),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
    .to_string()
}
