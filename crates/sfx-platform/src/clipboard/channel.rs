use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use clipboard_rs::{Clipboard, ClipboardContext};
use tracing::{debug, debug_span};

use sfx_core::ports::{TransferChannelError, TransferChannelPort};
use sfx_core::transfer::TransferPayload;

use super::clipboard_contents;

/// Installs drag payloads into the system clipboard, every format in one write.
pub struct ClipboardTransferChannel {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl ClipboardTransferChannel {
    #[cfg(target_os = "linux")]
    pub fn new() -> Result<Self> {
        use clipboard_rs::ClipboardContextX11Options;

        let context = ClipboardContext::new_with_options(ClipboardContextX11Options {
            read_timeout: None,
        })
        .map_err(|e| anyhow!(e))
        .context("failed to open the X11 clipboard")?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }

    #[cfg(not(target_os = "linux"))]
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!(e))
            .context("failed to open the system clipboard")?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }
}

impl TransferChannelPort for ClipboardTransferChannel {
    fn install(&self, payload: &TransferPayload) -> Result<(), TransferChannelError> {
        let _span = debug_span!("platform.clipboard.install", formats = payload.len()).entered();

        let contents = clipboard_contents(payload);
        let ctx = self
            .inner
            .lock()
            .map_err(|_| TransferChannelError::Unavailable("clipboard lock poisoned".into()))?;
        ctx.set(contents)
            .map_err(|e| TransferChannelError::Install(e.to_string()))?;

        debug!("clipboard payload written");
        Ok(())
    }
}
