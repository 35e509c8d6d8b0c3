use async_trait::async_trait;

use crate::os::OsPreference;
use crate::ports::errors::PreferenceStorageError;

/// Durable home of the user's OS preference.
#[async_trait]
pub trait PreferenceStoragePort: Send + Sync {
    /// `Ok(None)` when nothing was ever stored.
    async fn load(&self) -> Result<Option<OsPreference>, PreferenceStorageError>;

    /// Must be durable when it returns `Ok`.
    async fn save(&self, pref: OsPreference) -> Result<(), PreferenceStorageError>;
}
