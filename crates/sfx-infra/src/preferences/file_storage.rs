use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use sfx_core::ports::{PreferenceStorageError, PreferenceStoragePort};
use sfx_core::OsPreference;

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreferences {
    os_preference: OsPreference,
}

/// OS preference persisted as a small JSON document.
pub struct FilePreferenceStorage {
    path: PathBuf,
}

impl FilePreferenceStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write to a sibling temp file, then rename over the target so readers
    /// see either the old or the new document.
    async fn atomic_write(&self, content: &str) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create preferences dir failed: {}", dir.display()))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp preferences failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp preferences to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl PreferenceStoragePort for FilePreferenceStorage {
    async fn load(&self) -> Result<Option<OsPreference>, PreferenceStorageError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(PreferenceStorageError::Io(format!(
                    "read {} failed: {e}",
                    self.path.display()
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let stored: StoredPreferences = serde_json::from_str(&content)
            .map_err(|e| PreferenceStorageError::Corrupt(format!("{}: {e}", self.path.display())))?;
        debug!(path = %self.path.display(), os = %stored.os_preference, "loaded preferences file");
        Ok(Some(stored.os_preference))
    }

    async fn save(&self, pref: OsPreference) -> Result<(), PreferenceStorageError> {
        let content = serde_json::to_string_pretty(&StoredPreferences { os_preference: pref })
            .map_err(|e| PreferenceStorageError::Io(format!("serialize preferences failed: {e}")))?;

        self.atomic_write(&content)
            .await
            .map_err(|e| PreferenceStorageError::Io(format!("{e:#}")))
    }
}
