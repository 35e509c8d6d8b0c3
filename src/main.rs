mod bootstrap;
mod cli;
mod commands;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use sfx_core::catalog::FileQuery;
use sfx_core::ports::AppDirsPort;
use sfx_platform::DirsAppDirsAdapter;

use bootstrap::{load_host_config, resolve_config_path, wire_host};
use cli::{Cli, Commands};
use commands::ExportOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("failed to resolve application directories")?;

    bootstrap::tracing::init_tracing_subscriber(Some(&dirs.app_log_root))
        .context("failed to initialize tracing")?;

    let config_path = resolve_config_path(cli.config.as_deref(), &dirs);
    let config = load_host_config(&config_path, cli.config.is_some(), cli.base_url.as_deref())?;
    let ctx = wire_host(config, &dirs)?;

    match cli.command {
        Commands::Os { action } => commands::run_os(&ctx, action).await,
        Commands::Health => commands::run_health(&ctx).await,
        Commands::List { q, tags, project } => {
            commands::run_list(&ctx, FileQuery { q, tags, project }).await
        }
        Commands::Resolve { id, os } => commands::run_resolve(&ctx, &id, os.map(Into::into)).await,
        Commands::Export {
            id,
            hover_ms,
            from,
            headless,
        } => {
            let options = ExportOptions {
                hover: hover_ms.map(Duration::from_millis),
                origin: from.into_iter().map(Into::into).collect(),
                headless,
            };
            commands::run_export(&ctx, &id, options).await
        }
    }
}
