//! System clipboard as the native transfer channel.

mod channel;
mod contents;

pub use channel::ClipboardTransferChannel;
pub use contents::{clipboard_contents, file_uri_to_local_path};
