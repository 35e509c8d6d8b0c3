use crate::catalog::FileRecord;
use crate::ports::errors::DragImageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragImageHandle(pub u64);

/// Surface that renders the temporary preview shown under the pointer.
///
/// Rendered nodes are non-interactive and positioned off-screen; the caller
/// removes each one once the native drag has captured it.
pub trait DragImagePort: Send + Sync {
    fn render(&self, file: &FileRecord) -> Result<DragImageHandle, DragImageError>;
    fn remove(&self, handle: DragImageHandle);
}
