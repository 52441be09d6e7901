//! Logging utilities for autodoc
//!
//! This module is only available with the `logging` feature.
//!
//! Library users: autodoc emits tracing events, install your own subscriber.
//! Applications: use these convenience functions.

use std::sync::Once;

use autodoc_config::Settings;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Log level for engine output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// No logging output
    Silent,
    /// Only errors
    Error,
    /// Errors and warnings, including files that failed to parse
    Warn,
    /// Errors, warnings, and info (default)
    #[default]
    Info,
    /// Graph and parse summaries
    Debug,
    /// Per-import resolution and per-file chunking
    Trace,
}

impl LogLevel {
    /// Level named in `settings.log_level`, or the default.
    pub fn from_settings(settings: &Settings) -> Self {
        settings
            .log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or_default()
    }

    fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "off" => Ok(LogLevel::Silent),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("Invalid log level: {}", other)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter())
    }
}

fn install(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false).without_time())
        .init();
}

/// Initialize logging with the specified level
///
/// `RUST_LOG` directives still apply on top of `level`.
///
/// # Thread Safety
///
/// Installs a global subscriber. Safe to call from multiple threads; only the
/// first call takes effect.
///
/// # Example
///
/// ```rust,no_run
/// use autodoc::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(level_directive(level))
            .from_env_lossy();
        install(filter);
    });
}

/// Initialize logging from the `RUST_LOG` environment variable
///
/// Falls back to Info level if RUST_LOG is not set or invalid.
pub fn init_logging_from_env() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::builder()
                .with_default_directive(level_directive(LogLevel::Info))
                .from_env_lossy()
        });
        install(filter);
    });
}

/// Initialize logging at the level configured in `settings`.
pub fn init_logging_from_settings(settings: &Settings) {
    init_logging(LogLevel::from_settings(settings));
}

fn level_directive(level: LogLevel) -> tracing_subscriber::filter::Directive {
    let filter = match level {
        LogLevel::Silent => tracing_subscriber::filter::LevelFilter::OFF,
        LogLevel::Error => tracing_subscriber::filter::LevelFilter::ERROR,
        LogLevel::Warn => tracing_subscriber::filter::LevelFilter::WARN,
        LogLevel::Info => tracing_subscriber::filter::LevelFilter::INFO,
        LogLevel::Debug => tracing_subscriber::filter::LevelFilter::DEBUG,
        LogLevel::Trace => tracing_subscriber::filter::LevelFilter::TRACE,
    };
    filter.into()
}
