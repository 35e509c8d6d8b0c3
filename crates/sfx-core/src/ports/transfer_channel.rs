use crate::ports::errors::TransferChannelError;
use crate::transfer::TransferPayload;

/// The native channel a drag payload is handed to.
pub trait TransferChannelPort: Send + Sync {
    /// Replace whatever the channel holds with `payload`, all formats at once.
    fn install(&self, payload: &TransferPayload) -> Result<(), TransferChannelError>;
}
