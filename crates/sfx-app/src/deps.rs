//! Dependency grouping for card drag controllers.
//!
//! Not a builder: every field is required, nothing is defaulted.

use std::sync::Arc;

use sfx_core::ports::{AudioSourcePort, ClockPort, DragImagePort, TransferChannelPort};
use sfx_core::PathResolver;

use crate::settings::DragSettings;
use crate::usecases::OsPreferenceStore;

/// Shared by every card in a view. Cheap to clone.
#[derive(Clone)]
pub struct DragExportDeps {
    pub preferences: Arc<OsPreferenceStore>,
    pub resolver: PathResolver,
    pub audio_source: Arc<dyn AudioSourcePort>,
    pub transfer_channel: Arc<dyn TransferChannelPort>,
    pub drag_image: Arc<dyn DragImagePort>,
    pub clock: Arc<dyn ClockPort>,
    pub settings: DragSettings,
}
