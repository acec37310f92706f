//! Logging setup for host programs embedding the engine.
//!
//! The library only emits `tracing` events; hosts decide where they go.
//! `RUST_LOG` overrides the configured level when set.
//!
//! ```no_run
//! use wordle_plus::logging::{LogFormat, LoggingConfig};
//!
//! LoggingConfig::new(LogFormat::Json, "debug").init().unwrap();
//! ```

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use crate::core::{Result, WordleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text on stderr.
    Text,
    /// One JSON object per line on stderr.
    Json,
}

impl FromStr for LogFormat {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(WordleError::Logging(format!(
                "invalid log format '{}', expected text or json",
                s
            ))),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new(LogFormat::Text, "info")
    }
}

impl LoggingConfig {
    pub fn new(format: LogFormat, level: impl Into<String>) -> Self {
        Self {
            format,
            level: level.into(),
        }
    }

    /// Read `WORDLE_LOG_FORMAT` and `WORDLE_LOG_LEVEL`, falling back to
    /// text at info level.
    #[must_use]
    pub fn from_env() -> Self {
        let format = std::env::var("WORDLE_LOG_FORMAT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(LogFormat::Text);
        let level = std::env::var("WORDLE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self::new(format, level)
    }

    /// Install the global subscriber.
    ///
    /// Errors if the level is not a valid filter or a subscriber is
    /// already installed.
    pub fn init(&self) -> Result<()> {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => self.level_filter()?,
        };

        let installed = match self.format {
            LogFormat::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .try_init(),
            LogFormat::Text => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init(),
        };

        installed.map_err(|e| WordleError::Logging(e.to_string()))
    }

    /// Filter built from the configured level alone.
    fn level_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.level).map_err(|e| WordleError::Logging(e.to_string()))
    }
}
