//! Argument types shared by the CLI binaries.

use clap::ValueEnum;

/// Log level argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level (default)
    #[default]
    Warn,
    /// Error level (least verbose)
    Error,
}

impl LogLevel {
    /// Returns the level to use, `-v/--verbose` raising it to at least `Info`.
    pub fn with_verbose(self, verbose: bool) -> Self {
        match self {
            Self::Warn | Self::Error if verbose => Self::Info,
            level => level,
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
