use sfx_core::ports::TransferChannelError;
use sfx_core::FileId;

/// Errors surfaced by [`CardDragController`](super::CardDragController).
///
/// Every other failure in the drag path degrades instead of erroring.
#[derive(Debug, thiserror::Error)]
pub enum DragExportError {
    #[error("failed to install drag payload for file {file_id}: {source}")]
    InstallPayload {
        file_id: FileId,
        #[source]
        source: TransferChannelError,
    },
}
