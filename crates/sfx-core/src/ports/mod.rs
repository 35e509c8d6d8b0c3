//! Port interfaces for the application layer
//!
//! Ports define the contract between the drag-export use cases and the
//! infrastructure and platform adapters that talk to the catalog service,
//! the file system and the native drag channel.

pub mod app_dirs;
mod audio_source;
mod catalog;
mod clock;
mod drag_image;
pub mod errors;
mod preference_storage;
mod transfer_channel;

pub use app_dirs::AppDirsPort;
pub use audio_source::AudioSourcePort;
pub use catalog::{CatalogHealth, CatalogPort};
pub use clock::*;
pub use drag_image::{DragImageHandle, DragImagePort};
pub use errors::{
    AppDirsError, AudioFetchError, CatalogError, DragImageError, PreferenceStorageError,
    TransferChannelError,
};
pub use preference_storage::PreferenceStoragePort;
pub use transfer_channel::TransferChannelPort;
