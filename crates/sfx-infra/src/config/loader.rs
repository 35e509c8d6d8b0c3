use std::path::Path;

use anyhow::Context;
use tracing::info;

use super::BridgeConfig;

/// Read and parse a TOML config file.
///
/// # Errors
///
/// Fails when the file cannot be read or is not a valid config document.
pub fn load_config(config_path: &Path) -> anyhow::Result<BridgeConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config as TOML: {}", config_path.display()))
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_config_or_default(config_path: &Path) -> anyhow::Result<BridgeConfig> {
    if !config_path.exists() {
        info!(path = %config_path.display(), "config file not found, using defaults");
        return Ok(BridgeConfig::default());
    }
    load_config(config_path)
}
