use async_trait::async_trait;

use crate::ids::FileId;
use crate::ports::errors::AudioFetchError;
use crate::transfer::CachedAudio;

#[async_trait]
pub trait AudioSourcePort: Send + Sync {
    /// Fetch the raw bytes of one catalog file.
    async fn fetch_audio(&self, id: &FileId) -> Result<CachedAudio, AudioFetchError>;
}
