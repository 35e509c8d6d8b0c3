//! Drag export use cases
//!
//! pointer events
//!        ↓
//! CardDragController ── DragStateMachine (pure)
//!        ↓                    ↓
//! PrefetchCache        OsPreferenceStore → PathResolver → TransferPayloadBuilder
//!        ↓                                                   ↓
//! AudioSourcePort                               TransferChannelPort / DragImagePort

pub mod drag;
pub mod os_preference;
pub mod prefetch;

pub use drag::{CardDragController, DragExportError, DragStartOutcome, ExportSummary};
pub use os_preference::OsPreferenceStore;
pub use prefetch::PrefetchCache;
