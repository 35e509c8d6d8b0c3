//! Drag session domain module.
//!
//! A pure state machine for one card's hover, prefetch and drag lifecycle,
//! plus the ephemeral session record created on drag start.

mod session;
pub mod state_machine;
mod target;

pub use session::DragSession;
pub use state_machine::{DragAction, DragEvent, DragState, DragStateMachine};
pub use target::{DragTarget, ElementRole};
