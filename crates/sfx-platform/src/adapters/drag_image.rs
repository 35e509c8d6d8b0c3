use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use tracing::trace;

use sfx_core::ports::{DragImageError, DragImageHandle, DragImagePort};
use sfx_core::FileRecord;

/// Off-screen position used for every rendered preview.
pub const OFFSCREEN_POSITION: (i32, i32) = (-1000, -1000);

/// A rendered preview node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragImageNode {
    pub label: String,
    pub position: (i32, i32),
    pub interactive: bool,
}

/// Drag image surface that keeps its nodes in memory.
///
/// Tracks which previews are still attached so a host can verify that none
/// outlive their drag.
#[derive(Default)]
pub struct HeadlessDragImageSurface {
    next_handle: AtomicU64,
    live: Mutex<HashMap<DragImageHandle, DragImageNode>>,
}

impl HeadlessDragImageSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.live.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn node(&self, handle: DragImageHandle) -> Option<DragImageNode> {
        self.live
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&handle)
            .cloned()
    }
}

impl DragImagePort for HeadlessDragImageSurface {
    fn render(&self, file: &FileRecord) -> Result<DragImageHandle, DragImageError> {
        let handle = DragImageHandle(self.next_handle.fetch_add(1, Ordering::Relaxed));
        let node = DragImageNode {
            label: file.filename.clone(),
            position: OFFSCREEN_POSITION,
            interactive: false,
        };
        trace!(handle = handle.0, label = %node.label, "drag image rendered");
        self.live
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(handle, node);
        Ok(handle)
    }

    fn remove(&self, handle: DragImageHandle) {
        let removed = self
            .live
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&handle);
        if removed.is_some() {
            trace!(handle = handle.0, "drag image removed");
        }
    }
}
