use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::time::{sleep, Instant};
use tracing::{debug, info_span, Instrument};

use sfx_app::{CardDragController, DragStartOutcome};
use sfx_core::drag::{DragTarget, ElementRole};
use sfx_core::ports::{CatalogPort, TransferChannelPort};
use sfx_core::FileId;
use sfx_platform::{ClipboardTransferChannel, HeadlessDragImageSurface, InMemoryTransferChannel};

use super::describe_payload;
use crate::bootstrap::wiring::drag_settings;
use crate::bootstrap::HostContext;

const SETTLE_MARGIN: Duration = Duration::from_millis(20);
const PREFETCH_POLL: Duration = Duration::from_millis(25);

#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Fixed hover time. `None` hovers until the prefetch settles.
    pub hover: Option<Duration>,
    /// Roles from the gesture origin outward, card root excluded.
    pub origin: Vec<ElementRole>,
    pub headless: bool,
}

pub async fn run_export(ctx: &HostContext, id: &str, options: ExportOptions) -> anyhow::Result<()> {
    let file = ctx
        .catalog
        .get_file(&FileId::new(id))
        .await
        .with_context(|| format!("failed to fetch catalog record {id}"))?;

    let memory = Arc::new(InMemoryTransferChannel::new());
    let channel: Arc<dyn TransferChannelPort> = if options.headless {
        memory.clone()
    } else {
        Arc::new(
            ClipboardTransferChannel::new()
                .context("system clipboard unavailable, retry with --headless")?,
        )
    };
    let surface = Arc::new(HeadlessDragImageSurface::new());
    let card = CardDragController::new(file, ctx.drag_deps(channel, surface.clone()));

    let headless = options.headless;
    let span = info_span!("command.export", file_id = %id, headless);
    let outcome = async {
        card.pointer_enter().await;
        hover(&card, ctx, options.hover).await;

        let mut ancestry = options.origin;
        ancestry.push(ElementRole::Card);
        let outcome = card.drag_start(DragTarget::new(ancestry)).await;

        card.drag_end().await;
        card.teardown().await;
        // drag image removal runs on the next tick
        tokio::task::yield_now().await;
        debug!(live_drag_images = surface.live_count(), "drag finished");

        let outcome = outcome.context("drag export failed")?;
        match &outcome {
            DragStartOutcome::Suppressed => {
                println!("suppressed: gesture started inside an interactive control");
            }
            DragStartOutcome::Exported(summary) => {
                println!("session: {}", summary.session_id);
                println!("os: {}", summary.os);
                println!("uri: {}", summary.uri);
                match summary.embedded_bytes {
                    Some(size) => println!("embedded: {size} bytes"),
                    None => println!("embedded: none"),
                }
                if let Some(payload) = memory.current() {
                    for line in describe_payload(&payload) {
                        println!("  {line}");
                    }
                } else {
                    let formats: Vec<String> =
                        summary.formats.iter().map(ToString::to_string).collect();
                    println!("formats: {}", formats.join(", "));
                }
            }
        }
        Ok::<_, anyhow::Error>(outcome)
    }
    .instrument(span)
    .await?;

    if holds_clipboard(headless, &outcome) {
        // X11 and Wayland serve the selection from this process
        eprintln!("payload on clipboard, Ctrl-C to release");
        tokio::signal::ctrl_c()
            .await
            .context("failed to wait for Ctrl-C")?;
        debug!("clipboard released");
    }
    Ok(())
}

/// A real clipboard install only lives as long as the process owning it.
fn holds_clipboard(headless: bool, outcome: &DragStartOutcome) -> bool {
    !headless && matches!(outcome, DragStartOutcome::Exported(_))
}

async fn hover(card: &CardDragController, ctx: &HostContext, fixed: Option<Duration>) {
    if let Some(duration) = fixed {
        sleep(duration).await;
        return;
    }

    let settings = drag_settings(&ctx.config);
    sleep(settings.hover_debounce + settings.prefetch_delay + SETTLE_MARGIN).await;

    let deadline = Instant::now() + ctx.config.catalog.request_timeout();
    while card.cache().is_pending() && Instant::now() < deadline {
        sleep(PREFETCH_POLL).await;
    }
}
