//! Locate and load `config.toml`, then apply command-line overrides.

use std::path::{Path, PathBuf};

use anyhow::Context;
use sfx_core::app_dirs::AppDirs;
use sfx_infra::{load_config_or_default, BridgeConfig};
use tracing::debug;

/// Explicit `--config` wins; otherwise `config.toml` under the app data dir.
pub fn resolve_config_path(explicit: Option<&Path>, dirs: &AppDirs) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dirs.config_file())
}

/// Load the config (defaults when the file is missing) and apply overrides.
///
/// An explicitly named file must exist.
pub fn load_host_config(
    path: &Path,
    explicit: bool,
    base_url: Option<&str>,
) -> anyhow::Result<BridgeConfig> {
    if explicit && !path.exists() {
        anyhow::bail!("config file {} does not exist", path.display());
    }

    let mut config = load_config_or_default(path)
        .with_context(|| format!("Failed to load host config from {}", path.display()))?;

    if let Some(base_url) = base_url {
        config.catalog.base_url = base_url.to_string();
    }
    debug!(path = %path.display(), base_url = %config.catalog.base_url, "host config loaded");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn dirs_under(root: &Path) -> AppDirs {
        AppDirs {
            app_data_root: root.join("sfxdrag"),
            app_log_root: root.join("sfxdrag/logs"),
        }
    }

    #[test]
    fn test_config_path_defaults_to_app_data_dir() {
        let dirs = dirs_under(Path::new("/tmp"));
        assert_eq!(
            resolve_config_path(None, &dirs),
            PathBuf::from("/tmp/sfxdrag/config.toml")
        );
        assert_eq!(
            resolve_config_path(Some(Path::new("/etc/sfx.toml")), &dirs),
            PathBuf::from("/etc/sfx.toml")
        );
    }

    #[test]
    fn test_missing_default_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_host_config(&dir.path().join("config.toml"), false, None).unwrap();
        assert_eq!(config, BridgeConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = load_host_config(&dir.path().join("nope.toml"), true, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_base_url_flag_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[catalog]\nbase_url = \"http://catalog.lan:5000\"\n\n[drag]\nhover_debounce_ms = 150").unwrap();

        let config = load_host_config(file.path(), true, Some("http://localhost:9000")).unwrap();
        assert_eq!(config.catalog.base_url, "http://localhost:9000");
        assert_eq!(config.drag.hover_debounce_ms, 150);
    }
}
