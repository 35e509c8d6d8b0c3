use sfx_core::OsPreference;
use tracing::{info_span, Instrument};

use crate::bootstrap::HostContext;
use crate::cli::OsAction;

pub async fn run_os(ctx: &HostContext, action: OsAction) -> anyhow::Result<()> {
    let span = info_span!("command.os", action = ?action);
    async {
        match action {
            OsAction::Get => {
                let pref = ctx.preferences.get().await;
                println!("{pref}\t{}", pref.label());
            }
            OsAction::Set { os } => {
                let pref = OsPreference::from(os);
                ctx.preferences.set(pref).await;
                println!("{pref}\t{}", pref.label());
                println!("stored in {}", ctx.preference_file.display());
            }
            OsAction::List => {
                let current = ctx.preferences.get().await;
                for pref in OsPreference::ALL {
                    let marker = if pref == current { "*" } else { " " };
                    println!("{marker} {pref}\t{}", pref.label());
                }
            }
        }
        Ok(())
    }
    .instrument(span)
    .await
}
