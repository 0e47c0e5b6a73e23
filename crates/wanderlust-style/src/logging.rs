//! Structured logging system using tracing.
//!
//! Console output goes to stderr so generated CSS and JSON on stdout stay
//! clean. Optionally mirrors events as JSON into a daily rotating file.

use std::path::PathBuf;

use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration options.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory for JSON log files. `None` disables file logging.
    pub log_directory: Option<PathBuf>,
    /// Log file name prefix (e.g., "wanderlust-style" -> "wanderlust-style.2024-01-15").
    pub log_file_prefix: String,
    /// Maximum log level for console output.
    pub console_level: Level,
    /// Whether to include ANSI color codes in console output.
    pub console_ansi: bool,
    /// Whether to include target module in console logs.
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_directory: None,
            log_file_prefix: "wanderlust-style".to_string(),
            console_level: Level::WARN,
            console_ansi: true,
            include_target: false,
        }
    }
}

impl LoggingConfig {
    /// Verbose console output with module targets.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            console_level: Level::DEBUG,
            include_target: true,
            ..Self::default()
        }
    }

    /// Enable JSON file logging into `path`.
    #[must_use]
    pub fn with_log_directory(mut self, path: PathBuf) -> Self {
        self.log_directory = Some(path);
        self
    }

    /// Set the console log level.
    #[must_use]
    pub const fn with_console_level(mut self, level: Level) -> Self {
        self.console_level = level;
        self
    }

    fn console_filter(&self) -> EnvFilter {
        // RUST_LOG overrides the configured level
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(console_directives(self.console_level)))
    }
}

/// Guard that keeps file logging active. Drop this to flush and close log files.
pub struct LoggingGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Initialize the logging system with the given configuration.
///
/// Returns a guard that must be kept alive for the duration of the program.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
///
/// # Panics
///
/// Panics if logging has already been initialized.
pub fn init(config: &LoggingConfig) -> Result<LoggingGuard, LoggingError> {
    let (file_layer, file_guard) = match &config.log_directory {
        Some(directory) => {
            std::fs::create_dir_all(directory).map_err(|e| {
                LoggingError::DirectoryCreationFailed {
                    path: directory.clone(),
                    reason: e.to_string(),
                }
            })?;

            let appender = RollingFileAppender::new(
                Rotation::DAILY,
                directory,
                &config.log_file_prefix,
            );
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .json()
                .with_filter(EnvFilter::new(
                    "info,wanderlust_style=trace,wanderlust_core=trace",
                ));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.console_ansi)
        .with_target(config.include_target)
        .with_filter(config.console_filter());

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Get the default log directory.
#[must_use]
pub fn default_log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wanderlust-style")
        .join("logs")
}

/// Console filter: dependencies stay at `warn`, our crates follow `level`.
fn console_directives(level: Level) -> String {
    let level = level_to_directive(level);
    format!("warn,wanderlust_style={level},wanderlust_core={level}")
}

/// Convert a tracing Level to a filter directive string.
const fn level_to_directive(level: Level) -> &'static str {
    match level {
        Level::TRACE => "trace",
        Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warn",
        Level::ERROR => "error",
    }
}

/// Errors that can occur during logging initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// Failed to create the log directory.
    #[error("Failed to create log directory {path}: {reason}")]
    DirectoryCreationFailed {
        /// The path that could not be created.
        path: PathBuf,
        /// The reason for the failure.
        reason: String,
    },
}
