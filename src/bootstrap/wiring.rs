//! Dependency wiring.
//!
//! The only place that depends on sfx-infra, sfx-platform and sfx-app at the
//! same time. Assembly only: nothing here decides drag behavior.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use sfx_app::{DragExportDeps, DragSettings, OsPreferenceStore};
use sfx_core::app_dirs::AppDirs;
use sfx_core::ports::{DragImagePort, SystemClock, TransferChannelPort};
use sfx_core::{ClientSignature, PathResolver};
use sfx_infra::{BridgeConfig, FilePreferenceStorage, HttpCatalogClient};
use sfx_platform::native_client_signature;

/// Long-lived dependencies shared by every command.
pub struct HostContext {
    pub config: BridgeConfig,
    pub catalog: Arc<HttpCatalogClient>,
    pub preferences: Arc<OsPreferenceStore>,
    pub preference_file: PathBuf,
    pub resolver: PathResolver,
}

impl HostContext {
    /// Ports for card controllers, with the given native surfaces.
    pub fn drag_deps(
        &self,
        transfer_channel: Arc<dyn TransferChannelPort>,
        drag_image: Arc<dyn DragImagePort>,
    ) -> DragExportDeps {
        DragExportDeps {
            preferences: Arc::clone(&self.preferences),
            resolver: self.resolver.clone(),
            audio_source: self.catalog.clone(),
            transfer_channel,
            drag_image,
            clock: Arc::new(SystemClock),
            settings: drag_settings(&self.config),
        }
    }
}

pub fn drag_settings(config: &BridgeConfig) -> DragSettings {
    DragSettings {
        hover_debounce: config.drag.hover_debounce(),
        prefetch_delay: config.drag.prefetch_delay(),
        max_prefetch_bytes: config.drag.max_prefetch_bytes,
    }
}

/// Configured signature, or the platform this process runs on.
pub fn client_signature(config: &BridgeConfig) -> ClientSignature {
    config
        .client
        .platform_signature
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(ClientSignature::new)
        .unwrap_or_else(native_client_signature)
}

pub fn wire_host(config: BridgeConfig, dirs: &AppDirs) -> anyhow::Result<HostContext> {
    let endpoint = config.catalog.endpoint();

    let catalog = HttpCatalogClient::new(endpoint.clone(), config.catalog.request_timeout())
        .context("Failed to create catalog client")?
        .with_max_audio_bytes(config.drag.max_prefetch_bytes);

    let preference_file = config.preferences_path(dirs);
    let storage = Arc::new(FilePreferenceStorage::new(preference_file.clone()));
    let preferences = Arc::new(OsPreferenceStore::new(storage, client_signature(&config)));

    Ok(HostContext {
        catalog: Arc::new(catalog),
        preferences,
        preference_file,
        resolver: PathResolver::new(endpoint),
        config,
    })
}
