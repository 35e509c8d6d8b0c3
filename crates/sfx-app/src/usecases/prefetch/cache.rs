//! Per-card opportunistic audio prefetch.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::AbortHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, warn, Instrument};

use sfx_core::ports::AudioSourcePort;
use sfx_core::{CachedAudio, FileId};

struct PendingFetch {
    file_id: FileId,
    handle: AbortHandle,
}

#[derive(Default)]
struct CacheSlot {
    pending: Option<PendingFetch>,
    entry: Option<(FileId, CachedAudio)>,
    // bumped by every arm/cancel so a superseded task never writes
    generation: u64,
}

/// Holds at most one fetched blob for the card that owns it.
///
/// `arm` schedules a single deferred fetch on the current tokio runtime.
/// Drag start never waits on it: callers read whatever [`PrefetchCache::get`]
/// returns at that instant.
pub struct PrefetchCache {
    source: Arc<dyn AudioSourcePort>,
    max_bytes: u64,
    slot: Arc<Mutex<CacheSlot>>,
}

fn lock(slot: &Mutex<CacheSlot>) -> MutexGuard<'_, CacheSlot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl PrefetchCache {
    pub fn new(source: Arc<dyn AudioSourcePort>, max_bytes: u64) -> Self {
        Self {
            source,
            max_bytes,
            slot: Arc::new(Mutex::new(CacheSlot::default())),
        }
    }

    /// Schedule a fetch of `file_id` after `delay`.
    ///
    /// No-op when a fetch for the same id is already scheduled or its entry is
    /// already held. Arming a different id replaces both.
    pub fn arm(&self, file_id: FileId, delay: Duration) {
        let mut slot = lock(&self.slot);

        if let Some(pending) = slot.pending.take() {
            if pending.file_id == file_id {
                debug!(file_id = %file_id, "prefetch already scheduled");
                slot.pending = Some(pending);
                return;
            }
            pending.handle.abort();
        }

        let holds_same = matches!(&slot.entry, Some((cached_id, _)) if *cached_id == file_id);
        if holds_same {
            debug!(file_id = %file_id, "prefetch entry already held");
            return;
        }
        slot.entry = None;

        slot.generation += 1;
        let generation = slot.generation;
        let span = tracing::debug_span!("usecase.prefetch.fetch", file_id = %file_id);
        let task = fetch_after(
            Arc::clone(&self.source),
            Arc::clone(&self.slot),
            file_id.clone(),
            Instant::now() + delay,
            generation,
            self.max_bytes,
        )
        .instrument(span);

        let handle = tokio::spawn(task).abort_handle();
        slot.pending = Some(PendingFetch { file_id, handle });
    }

    /// Abort a scheduled or in-flight fetch. A completed entry is kept.
    pub fn cancel(&self) {
        let mut slot = lock(&self.slot);
        slot.generation += 1;
        if let Some(pending) = slot.pending.take() {
            pending.handle.abort();
            debug!(file_id = %pending.file_id, "prefetch cancelled");
        }
    }

    /// The held blob, if a fetch has completed.
    pub fn get(&self) -> Option<CachedAudio> {
        lock(&self.slot).entry.as_ref().map(|(_, audio)| audio.clone())
    }

    /// The held blob, only when it belongs to `file_id`.
    pub fn get_for(&self, file_id: &FileId) -> Option<CachedAudio> {
        match &lock(&self.slot).entry {
            Some((cached_id, audio)) if cached_id == file_id => Some(audio.clone()),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        lock(&self.slot).pending.is_some()
    }

    /// Abort pending work and discard the held entry.
    pub fn shutdown(&self) {
        self.cancel();
        lock(&self.slot).entry = None;
    }
}

impl Drop for PrefetchCache {
    fn drop(&mut self) {
        if let Some(pending) = lock(&self.slot).pending.take() {
            pending.handle.abort();
        }
    }
}

async fn fetch_after(
    source: Arc<dyn AudioSourcePort>,
    slot: Arc<Mutex<CacheSlot>>,
    file_id: FileId,
    deadline: Instant,
    generation: u64,
    max_bytes: u64,
) {
    sleep_until(deadline).await;

    let result = source.fetch_audio(&file_id).await;

    let mut slot = lock(&slot);
    if slot.generation != generation {
        return;
    }
    slot.pending = None;

    match result {
        Ok(audio) if audio.len() as u64 > max_bytes => {
            warn!(size = audio.len(), limit = max_bytes, "prefetched audio over size limit, discarded");
        }
        Ok(audio) => {
            debug!(size = audio.len(), mime = %audio.mime, "prefetch complete");
            slot.entry = Some((file_id, audio));
        }
        Err(err) => {
            debug!(error = %err, "prefetch failed, drag will carry the uri only");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sfx_core::ports::AudioFetchError;
    use sfx_core::AudioMime;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::advance;

    struct CountingSource {
        calls: AtomicUsize,
        size: usize,
        fail: bool,
    }

    impl CountingSource {
        fn new(size: usize) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                size,
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                size: 0,
                fail: true,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AudioSourcePort for CountingSource {
        async fn fetch_audio(&self, id: &FileId) -> Result<CachedAudio, AudioFetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AudioFetchError::NotFound { id: id.to_string() });
            }
            Ok(CachedAudio::new(vec![0u8; self.size], AudioMime::from_filename("boom.wav")))
        }
    }

    struct GatedSource {
        started: AtomicUsize,
        release: tokio::sync::Notify,
    }

    #[async_trait]
    impl AudioSourcePort for GatedSource {
        async fn fetch_audio(&self, _id: &FileId) -> Result<CachedAudio, AudioFetchError> {
            self.started.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(CachedAudio::new(vec![0u8; 4], AudioMime::from_filename("boom.wav")))
        }
    }

    async fn settle(by: Duration) {
        advance(by).await;
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_delay_means_zero_fetches() {
        let source = CountingSource::new(4);
        let cache = PrefetchCache::new(source.clone(), 1024);

        cache.arm(FileId::from(7u64), Duration::from_millis(300));
        settle(Duration::from_millis(200)).await;
        cache.cancel();
        settle(Duration::from_secs(5)).await;

        assert_eq!(source.calls(), 0);
        assert!(cache.get().is_none());
        assert!(!cache.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_exactly_one_fetch_at_delay() {
        let source = CountingSource::new(4);
        let cache = PrefetchCache::new(source.clone(), 1024);

        cache.arm(FileId::from(7u64), Duration::from_millis(300));
        settle(Duration::from_millis(299)).await;
        assert_eq!(source.calls(), 0);

        settle(Duration::from_millis(1)).await;
        assert_eq!(source.calls(), 1);
        assert_eq!(cache.get_for(&FileId::from(7u64)).map(|a| a.len()), Some(4));

        settle(Duration::from_secs(5)).await;
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_arm_is_a_no_op() {
        let source = CountingSource::new(4);
        let cache = PrefetchCache::new(source.clone(), 1024);

        cache.arm(FileId::from(7u64), Duration::from_millis(300));
        settle(Duration::from_millis(100)).await;
        cache.arm(FileId::from(7u64), Duration::from_millis(300));
        settle(Duration::from_millis(200)).await;
        assert_eq!(source.calls(), 1);

        // entry already held
        cache.arm(FileId::from(7u64), Duration::ZERO);
        settle(Duration::from_secs(1)).await;
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_fetch_leaves_cache_empty() {
        let source = CountingSource::failing();
        let cache = PrefetchCache::new(source.clone(), 1024);

        cache.arm(FileId::from(7u64), Duration::ZERO);
        settle(Duration::from_millis(1)).await;

        assert_eq!(source.calls(), 1);
        assert!(cache.get().is_none());
        assert!(!cache.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_oversized_blob_is_discarded() {
        let source = CountingSource::new(2048);
        let cache = PrefetchCache::new(source.clone(), 1024);

        cache.arm(FileId::from(7u64), Duration::ZERO);
        settle(Duration::from_millis(1)).await;

        assert_eq!(source.calls(), 1);
        assert!(cache.get().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_keeps_completed_entry_and_shutdown_drops_it() {
        let source = CountingSource::new(4);
        let cache = PrefetchCache::new(source.clone(), 1024);

        cache.arm(FileId::from(7u64), Duration::ZERO);
        settle(Duration::from_millis(1)).await;
        cache.cancel();
        assert!(cache.get().is_some());

        cache.shutdown();
        assert!(cache.get().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_arming_another_file_replaces_entry() {
        let source = CountingSource::new(4);
        let cache = PrefetchCache::new(source.clone(), 1024);

        cache.arm(FileId::from(7u64), Duration::ZERO);
        settle(Duration::from_millis(1)).await;
        cache.arm(FileId::from(8u64), Duration::from_millis(300));

        assert!(cache.get().is_none());
        settle(Duration::from_millis(300)).await;
        assert!(cache.get_for(&FileId::from(8u64)).is_some());
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_scheduled_fetch() {
        let source = CountingSource::new(4);
        let cache = PrefetchCache::new(source.clone(), 1024);

        cache.arm(FileId::from(7u64), Duration::from_millis(300));
        drop(cache);
        settle(Duration::from_secs(1)).await;

        assert_eq!(source.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_in_flight_fetch_stores_nothing() {
        let source = Arc::new(GatedSource {
            started: AtomicUsize::new(0),
            release: tokio::sync::Notify::new(),
        });
        let cache = PrefetchCache::new(source.clone(), 1024);

        cache.arm(FileId::from(7u64), Duration::from_millis(300));
        settle(Duration::from_millis(300)).await;
        assert_eq!(source.started.load(Ordering::SeqCst), 1);
        assert!(cache.is_pending());

        cache.cancel();
        source.release.notify_one();
        settle(Duration::from_secs(1)).await;

        assert!(cache.get().is_none());
        assert!(!cache.is_pending());
    }
}
