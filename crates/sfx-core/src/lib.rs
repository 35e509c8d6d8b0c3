//! # sfx-core
//!
//! Core domain models and drag-export logic for sfxdrag.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! path resolution, transfer payload assembly and the drag session state machine.
//! Everything that touches the outside world goes through [`ports`].

// Public module exports
pub mod app_dirs;
pub mod catalog;
pub mod drag;
pub mod ids;
pub mod os;
pub mod path;
pub mod ports;
pub mod transfer;

// Re-export commonly used types at the crate root
pub use catalog::FileRecord;
pub use drag::{
    DragAction, DragEvent, DragSession, DragState, DragStateMachine, DragTarget, ElementRole,
};
pub use ids::{FileId, SessionId};
pub use os::{ClientSignature, OsPreference, PathConvention};
pub use path::{CatalogEndpoint, NativePath, PathResolver, TransferUri};
pub use transfer::{
    AudioMime, CachedAudio, DropEffect, EmbeddedFile, TransferEntry, TransferFormat, TransferPayload,
    TransferPayloadBuilder,
};
