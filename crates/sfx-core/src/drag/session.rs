use crate::ids::{FileId, SessionId};
use crate::transfer::CachedAudio;

/// One in-progress drag of one card. Created on drag start and dropped on
/// drag end or when a newer drag start supersedes it.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub session_id: SessionId,
    pub source_file_id: FileId,
    /// Prefetched bytes that were ready at drag start, if any.
    pub armed_cache_entry: Option<CachedAudio>,
    pub started_at_ms: i64,
}

impl DragSession {
    pub fn new(
        session_id: SessionId,
        source_file_id: FileId,
        armed_cache_entry: Option<CachedAudio>,
        started_at_ms: i64,
    ) -> Self {
        Self {
            session_id,
            source_file_id,
            armed_cache_entry,
            started_at_ms,
        }
    }

    pub fn has_embedded_audio(&self) -> bool {
        self.armed_cache_entry.is_some()
    }
}
