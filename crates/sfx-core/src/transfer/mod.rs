//! Multi-format transfer payload for native drag export.
//!
//! No single native transfer format is honored by every receiving application,
//! so a payload always carries the URI as plain text, as a URI list and as a
//! `DownloadURL` descriptor, plus the file bytes when a prefetch finished in time.

mod builder;
mod mime;
mod payload;

pub use builder::TransferPayloadBuilder;
pub use mime::AudioMime;
pub use payload::{CachedAudio, DropEffect, EmbeddedFile, TransferEntry, TransferFormat, TransferPayload};
