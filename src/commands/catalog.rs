use anyhow::{bail, Context};
use sfx_core::catalog::FileQuery;
use sfx_core::ports::CatalogPort;

use crate::bootstrap::HostContext;

pub async fn run_health(ctx: &HostContext) -> anyhow::Result<()> {
    let health = ctx
        .catalog
        .health()
        .await
        .with_context(|| format!("catalog at {} is unreachable", ctx.config.catalog.base_url))?;

    println!("status: {}", health.status);
    if let Some(root) = &health.root_mount {
        println!("root_mount: {root}");
    }
    if !health.is_ok() {
        bail!("catalog reports status {:?}", health.status);
    }
    Ok(())
}

pub async fn run_list(ctx: &HostContext, query: FileQuery) -> anyhow::Result<()> {
    let files = ctx
        .catalog
        .list_files(&query)
        .await
        .context("failed to list catalog files")?;

    for file in &files {
        println!("{}\t{}\t{}", file.id, file.filename, file.native_path_primary);
    }
    tracing::debug!(count = files.len(), "catalog files listed");
    Ok(())
}
