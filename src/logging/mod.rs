//! Diagnostic logging.
//!
//! Installs a `tracing` fmt subscriber writing to stderr, since stdout is
//! reserved for the push stream. The level comes from `[logging]` in the
//! config file.

use crate::config::LoggingConfig;
use anyhow::{anyhow, Result};
use tracing::Level;

/// Parse a level name such as `"debug"`. Case-insensitive.
pub fn parse_level(name: &str) -> Result<Level> {
    name.trim()
        .parse::<Level>()
        .map_err(|_| anyhow!("Unknown log level '{}'", name))
}

pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = parse_level(&config.level)?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;
    tracing::debug!(%level, "logging initialized");
    Ok(())
}
