//! In-process adapters for hosts without a native drag surface.

mod drag_image;
mod transfer;

pub use drag_image::{DragImageNode, HeadlessDragImageSurface};
pub use transfer::InMemoryTransferChannel;
