use std::time::Duration;

/// Timing and size knobs for one card's drag lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSettings {
    /// Sustained hover required before the prefetch is armed.
    pub hover_debounce: Duration,
    /// Extra delay between arming and the fetch itself.
    pub prefetch_delay: Duration,
    /// Fetched blobs above this size are discarded.
    pub max_prefetch_bytes: u64,
}

impl DragSettings {
    pub const DEFAULT_HOVER_DEBOUNCE_MS: u64 = 300;
    pub const DEFAULT_MAX_PREFETCH_BYTES: u64 = 64 * 1024 * 1024;
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            hover_debounce: Duration::from_millis(Self::DEFAULT_HOVER_DEBOUNCE_MS),
            prefetch_delay: Duration::ZERO,
            max_prefetch_bytes: Self::DEFAULT_MAX_PREFETCH_BYTES,
        }
    }
}
