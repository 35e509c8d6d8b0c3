//! Card drag orchestration.

mod controller;
mod error;

pub use controller::{CardDragController, DragStartOutcome, ExportSummary};
pub use error::DragExportError;
