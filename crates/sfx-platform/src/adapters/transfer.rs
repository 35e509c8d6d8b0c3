use std::sync::{Mutex, PoisonError};

use sfx_core::ports::{TransferChannelError, TransferChannelPort};
use sfx_core::transfer::TransferPayload;

/// Holds the most recently installed payload in memory.
///
/// Installing replaces the previous payload, the same as a native channel.
#[derive(Default)]
pub struct InMemoryTransferChannel {
    current: Mutex<Option<TransferPayload>>,
    installs: Mutex<usize>,
}

impl InMemoryTransferChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<TransferPayload> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn install_count(&self) -> usize {
        *self.installs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TransferChannelPort for InMemoryTransferChannel {
    fn install(&self, payload: &TransferPayload) -> Result<(), TransferChannelError> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(payload.clone());
        *self.installs.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}
