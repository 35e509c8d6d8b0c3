//! # Configuration
//!
//! `config.toml` mapped onto [`BridgeConfig`]. Every key is optional; missing
//! sections and keys take the defaults below.
//!
//! ```toml
//! [catalog]
//! base_url = "http://localhost:5000"
//! request_timeout_ms = 10000
//!
//! [drag]
//! hover_debounce_ms = 300
//! prefetch_delay_ms = 0
//! max_prefetch_bytes = 67108864
//!
//! [preferences]
//! path = "/home/me/.local/share/sfxdrag/preferences.json"
//!
//! [client]
//! platform_signature = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)"
//! ```

mod loader;

pub use loader::{load_config, load_config_or_default};

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sfx_core::app_dirs::AppDirs;
use sfx_core::CatalogEndpoint;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub catalog: CatalogSection,
    pub drag: DragSection,
    pub preferences: PreferencesSection,
    pub client: ClientSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    pub base_url: String,
    pub request_timeout_ms: u64,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

impl CatalogSection {
    pub fn endpoint(&self) -> CatalogEndpoint {
        CatalogEndpoint::new(self.base_url.as_str())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSection {
    pub hover_debounce_ms: u64,
    pub prefetch_delay_ms: u64,
    pub max_prefetch_bytes: u64,
}

impl Default for DragSection {
    fn default() -> Self {
        Self {
            hover_debounce_ms: 300,
            prefetch_delay_ms: 0,
            max_prefetch_bytes: 64 * 1024 * 1024,
        }
    }
}

impl DragSection {
    pub fn hover_debounce(&self) -> Duration {
        Duration::from_millis(self.hover_debounce_ms)
    }

    pub fn prefetch_delay(&self) -> Duration {
        Duration::from_millis(self.prefetch_delay_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesSection {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSection {
    pub platform_signature: Option<String>,
}

impl BridgeConfig {
    /// Configured preference file, or `preferences.json` under the app data dir.
    pub fn preferences_path(&self, dirs: &AppDirs) -> PathBuf {
        self.preferences
            .path
            .clone()
            .unwrap_or_else(|| dirs.preferences_file())
    }
}
