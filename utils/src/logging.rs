//! Structured logging initialisation via `tracing`.
//!
//! Two output formats are supported:
//! - [`LogFormat::Human`] — human-readable lines (development).
//! - [`LogFormat::Json`] — newline-delimited JSON (log aggregation).
//!
//! The filter level can be overridden at runtime via the `RUST_LOG`
//! environment variable. When `RUST_LOG` is not set, the caller-supplied
//! `level` string is used (e.g. `"info"`, `"debug,haze_wallet_core=trace"`).

use std::str::FromStr;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Selects the output format for structured logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Initialise the global tracing subscriber.
///
/// Logs go to stderr so that signed JSON printed on stdout stays clean.
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(format: LogFormat, level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Human => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()
            .is_ok(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .is_ok(),
    }
}

/// Initialise the tracing subscriber with defaults: human format, `RUST_LOG`
/// or `warn`.
pub fn init_tracing() -> bool {
    init_logging(LogFormat::Human, "warn")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_log_formats() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" Human ".parse::<LogFormat>().unwrap(), LogFormat::Human);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn second_init_reports_already_installed() {
        let _ = init_tracing();
        assert!(!init_logging(LogFormat::Json, "debug"));
    }
}
