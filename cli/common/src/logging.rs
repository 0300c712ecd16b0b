//! Logging initialization utilities.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

use crate::LogLevel;

/// Initialize logging with the specified level.
///
/// Logs are written to stderr so stdout only carries user-facing messages.
/// Fails if a global subscriber is already installed.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let level: Level = level.into();

    fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(())
}
