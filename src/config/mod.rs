pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub use model::{AppConfig, LoggingConfig, RuntimeConfig};

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardserve")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

/// Writes `config` to `path` if nothing is there yet. Returns whether it
/// wrote.
pub fn init_config_file(path: &Path, config: &AppConfig) -> bool {
    if path.exists() {
        return false;
    }
    match save_config_to(path, config) {
        Ok(()) => {
            info!(path = %path.display(), "wrote default config");
            true
        }
        Err(e) => {
            warn!("could not write default config: {:#}", e);
            false
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    Ok(config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}
