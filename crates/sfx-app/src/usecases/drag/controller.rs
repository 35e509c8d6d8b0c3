//! Card drag controller.
//!
//! Executes the drag state machine's actions against the ports for one card.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, info_span, warn, Instrument};

use sfx_core::drag::{DragAction, DragEvent, DragSession, DragState, DragStateMachine, DragTarget};
use sfx_core::transfer::{CachedAudio, TransferFormat, TransferPayloadBuilder};
use sfx_core::{FileRecord, OsPreference, SessionId, TransferUri};

use super::DragExportError;
use crate::deps::DragExportDeps;
use crate::usecases::PrefetchCache;

/// What was handed to the transfer channel for one drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub session_id: SessionId,
    pub os: OsPreference,
    pub uri: TransferUri,
    pub formats: Vec<TransferFormat>,
    /// Size of the embedded file entry, when a prefetch had completed.
    pub embedded_bytes: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragStartOutcome {
    Exported(ExportSummary),
    /// Gesture started inside an interactive control. Nothing was installed
    /// and the host must prevent its native default drag.
    Suppressed,
}

impl DragStartOutcome {
    pub fn prevents_native_default(&self) -> bool {
        matches!(self, DragStartOutcome::Suppressed)
    }

    pub fn summary(&self) -> Option<&ExportSummary> {
        match self {
            DragStartOutcome::Exported(summary) => Some(summary),
            DragStartOutcome::Suppressed => None,
        }
    }
}

struct CardState {
    machine: DragState,
    debounce: Option<AbortHandle>,
    session: Option<DragSession>,
}

struct CardInner {
    file: FileRecord,
    deps: DragExportDeps,
    builder: TransferPayloadBuilder,
    cache: PrefetchCache,
    state: Mutex<CardState>,
}

/// Hover and drag lifecycle of one card.
///
/// Each card instance owns its controller and its [`PrefetchCache`]; there is
/// no registry shared between cards. Dropping the controller aborts any
/// pending debounce or prefetch, the same as [`CardDragController::teardown`].
pub struct CardDragController {
    inner: Arc<CardInner>,
}

impl CardDragController {
    pub fn new(file: FileRecord, deps: DragExportDeps) -> Self {
        let cache = PrefetchCache::new(
            Arc::clone(&deps.audio_source),
            deps.settings.max_prefetch_bytes,
        );
        Self {
            inner: Arc::new(CardInner {
                file,
                deps,
                builder: TransferPayloadBuilder::new(),
                cache,
                state: Mutex::new(CardState {
                    machine: DragState::Idle,
                    debounce: None,
                    session: None,
                }),
            }),
        }
    }

    pub fn file(&self) -> &FileRecord {
        &self.inner.file
    }

    pub fn cache(&self) -> &PrefetchCache {
        &self.inner.cache
    }

    pub async fn state(&self) -> DragState {
        self.inner.state.lock().await.machine.clone()
    }

    pub async fn session(&self) -> Option<DragSession> {
        self.inner.state.lock().await.session.clone()
    }

    pub async fn pointer_enter(&self) -> DragState {
        self.fire(DragEvent::PointerEnter).await
    }

    pub async fn pointer_leave(&self) -> DragState {
        self.fire(DragEvent::PointerLeave).await
    }

    /// Native drag gesture started on `target`.
    ///
    /// Never waits for a prefetch: the payload embeds the audio only when the
    /// fetch had already completed.
    pub async fn drag_start(&self, target: DragTarget) -> Result<DragStartOutcome, DragExportError> {
        let os = self.inner.deps.preferences.get().await;
        let event = DragEvent::DragStart {
            target,
            session_id: SessionId::new(),
        };
        let (_, outcome) = self.inner.dispatch(event, Some(os)).await?;
        Ok(outcome.unwrap_or(DragStartOutcome::Suppressed))
    }

    pub async fn drag_end(&self) -> DragState {
        self.fire(DragEvent::DragEnd).await
    }

    /// Card left the view: cancel everything and drop the cached blob.
    pub async fn teardown(&self) -> DragState {
        self.fire(DragEvent::Teardown).await
    }

    async fn fire(&self, event: DragEvent) -> DragState {
        match self.inner.dispatch(event, None).await {
            Ok((state, _)) => state,
            Err(err) => {
                warn!(error = %err, "drag event failed");
                self.state().await
            }
        }
    }
}

impl CardInner {
    async fn dispatch(
        self: &Arc<Self>,
        event: DragEvent,
        os: Option<OsPreference>,
    ) -> Result<(DragState, Option<DragStartOutcome>), DragExportError> {
        let span = info_span!("usecase.card_drag.dispatch", file_id = %self.file.id, event = ?event);
        async {
            let mut state = self.state.lock().await;
            if event == DragEvent::DebounceElapsed {
                // the firing task is the one holding this handle
                state.debounce = None;
            }

            let from = state.machine.clone();
            let (next, actions) = DragStateMachine::transition(from.clone(), event);
            if from != next {
                info!(from = ?from, to = ?next, "drag state transition");
            }
            state.machine = next;

            let mut outcome = None;
            for action in actions {
                debug!(?action, "drag executing action");
                match action {
                    DragAction::StartDebounce => self.start_debounce(&mut state),
                    DragAction::CancelDebounce => {
                        if let Some(handle) = state.debounce.take() {
                            handle.abort();
                        }
                    }
                    DragAction::ArmPrefetch => self
                        .cache
                        .arm(self.file.id.clone(), self.deps.settings.prefetch_delay),
                    DragAction::CancelPrefetch => self.cache.cancel(),
                    DragAction::ReleaseCache => self.cache.shutdown(),
                    DragAction::PreventNativeDrag => {
                        debug!("drag started inside an interactive control, suppressed");
                        outcome = Some(DragStartOutcome::Suppressed);
                    }
                    DragAction::BeginExport { session_id } => {
                        let Some(os) = os else {
                            warn!(%session_id, "export requested without an os preference");
                            continue;
                        };
                        match self.export(&mut state, session_id, os) {
                            Ok(summary) => outcome = Some(DragStartOutcome::Exported(summary)),
                            Err(err) => {
                                warn!(error = %err, "drag export failed, session dropped");
                                state.machine = DragState::Idle;
                                state.session = None;
                                return Err(err);
                            }
                        }
                    }
                    DragAction::EndSession { session_id } => {
                        let is_current = state
                            .session
                            .as_ref()
                            .is_some_and(|s| s.session_id == session_id);
                        if is_current {
                            state.session = None;
                        }
                        debug!(%session_id, "drag session ended");
                    }
                }
            }

            Ok((state.machine.clone(), outcome))
        }
        .instrument(span)
        .await
    }

    fn start_debounce(self: &Arc<Self>, state: &mut CardState) {
        if let Some(stale) = state.debounce.take() {
            stale.abort();
        }

        let card = Arc::downgrade(self);
        let deadline = Instant::now() + self.deps.settings.hover_debounce;
        let task = async move {
            sleep_until(deadline).await;
            if let Some(card) = card.upgrade() {
                let _ = card.dispatch(DragEvent::DebounceElapsed, None).await;
            }
        };
        state.debounce = Some(tokio::spawn(task).abort_handle());
    }

    fn export(
        &self,
        state: &mut CardState,
        session_id: SessionId,
        os: OsPreference,
    ) -> Result<ExportSummary, DragExportError> {
        let uri = self.deps.resolver.resolve(&self.file, os);
        let cached = self.cache.get_for(&self.file.id);
        let payload = self.builder.build(&self.file, &uri, cached.as_ref());

        self.deps
            .transfer_channel
            .install(&payload)
            .map_err(|source| DragExportError::InstallPayload {
                file_id: self.file.id.clone(),
                source,
            })?;

        let summary = ExportSummary {
            session_id: session_id.clone(),
            os,
            uri,
            formats: payload.formats().collect(),
            embedded_bytes: cached.as_ref().map(CachedAudio::len),
        };
        info!(
            %session_id,
            os = %os,
            uri = %summary.uri,
            embedded = summary.embedded_bytes.is_some(),
            "drag payload installed"
        );

        state.session = Some(DragSession::new(
            session_id,
            self.file.id.clone(),
            cached,
            self.deps.clock.now_ms(),
        ));
        self.show_drag_image();

        Ok(summary)
    }

    fn show_drag_image(&self) {
        match self.deps.drag_image.render(&self.file) {
            Ok(handle) => {
                let surface = Arc::clone(&self.deps.drag_image);
                // the native drag snapshots the image synchronously; gone on the next tick
                tokio::spawn(async move {
                    tokio::task::yield_now().await;
                    surface.remove(handle);
                });
            }
            Err(err) => warn!(error = %err, "drag image unavailable, host default is used"),
        }
    }
}

impl Drop for CardInner {
    fn drop(&mut self) {
        if let Some(handle) = self.state.get_mut().debounce.take() {
            handle.abort();
        }
    }
}
