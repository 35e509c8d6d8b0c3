//! sfxdrag application layer
//!
//! Use cases that drive drag export: the OS preference store, the per-card
//! prefetch cache and the card drag controller that executes the pure drag
//! state machine against the ports.

pub mod deps;
pub mod settings;
pub mod usecases;

pub use deps::DragExportDeps;
pub use settings::DragSettings;
pub use usecases::{
    CardDragController, DragExportError, DragStartOutcome, ExportSummary, OsPreferenceStore,
    PrefetchCache,
};
