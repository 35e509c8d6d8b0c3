//! Process-wide OS path convention preference.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, info_span, warn, Instrument};

use sfx_core::ports::PreferenceStoragePort;
use sfx_core::{ClientSignature, OsPreference};

/// Resolves which native path convention drag export uses.
///
/// ## Behavior
/// - The first `get` loads the stored value; with nothing stored (or an
///   unreadable store) it infers one from the client platform signature.
/// - Inferred values are kept in memory only, never written back.
/// - `set` is visible to the next `get` immediately, whether or not the
///   durable write succeeds.
pub struct OsPreferenceStore {
    storage: Arc<dyn PreferenceStoragePort>,
    signature: ClientSignature,
    current: RwLock<Option<OsPreference>>,
}

impl OsPreferenceStore {
    pub fn new(storage: Arc<dyn PreferenceStoragePort>, signature: ClientSignature) -> Self {
        Self {
            storage,
            signature,
            current: RwLock::new(None),
        }
    }

    pub async fn get(&self) -> OsPreference {
        if let Some(pref) = *self.current.read().await {
            return pref;
        }

        let span = info_span!("usecase.os_preference.load");
        let resolved = async {
            match self.storage.load().await {
                Ok(Some(pref)) => {
                    debug!(os = %pref, "loaded stored os preference");
                    pref
                }
                Ok(None) => {
                    let pref = self.signature.detect();
                    debug!(os = %pref, signature = %self.signature.as_str(), "no stored os preference, detected from platform");
                    pref
                }
                Err(err) => {
                    let pref = self.signature.detect();
                    warn!(error = %err, os = %pref, "os preference storage unreadable, using detected value");
                    pref
                }
            }
        }
        .instrument(span)
        .await;

        // a concurrent set() wins over whatever was loaded
        *self.current.write().await.get_or_insert(resolved)
    }

    pub async fn set(&self, pref: OsPreference) {
        let span = info_span!("usecase.os_preference.set", os = %pref);
        async {
            *self.current.write().await = Some(pref);

            match self.storage.save(pref).await {
                Ok(()) => info!("os preference saved"),
                Err(err) => warn!(error = %err, "failed to persist os preference, keeping it for this session"),
            }
        }
        .instrument(span)
        .await
    }
}
