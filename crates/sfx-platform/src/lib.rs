//! # sfx-platform
//!
//! Platform-specific adapters for sfxdrag.
//!
//! This crate contains the implementations that touch the operating system:
//! the system clipboard as a native transfer channel, the drag image
//! surface, application directories and the running platform's signature.

pub mod adapters;
pub mod app_dirs;
pub mod clipboard;
pub mod signature;

pub use adapters::{DragImageNode, HeadlessDragImageSurface, InMemoryTransferChannel};
pub use app_dirs::DirsAppDirsAdapter;
pub use clipboard::ClipboardTransferChannel;
pub use signature::native_client_signature;
