use anyhow::Context;
use sfx_core::ports::CatalogPort;
use sfx_core::transfer::TransferPayloadBuilder;
use sfx_core::{FileId, NativePath, OsPreference};

use super::describe_payload;
use crate::bootstrap::HostContext;

pub async fn run_resolve(
    ctx: &HostContext,
    id: &str,
    os: Option<OsPreference>,
) -> anyhow::Result<()> {
    let file = ctx
        .catalog
        .get_file(&FileId::new(id))
        .await
        .with_context(|| format!("failed to fetch catalog record {id}"))?;

    let os = match os {
        Some(os) => os,
        None => ctx.preferences.get().await,
    };
    let uri = ctx.resolver.resolve(&file, os);
    let payload = TransferPayloadBuilder::new().build(&file, &uri, None);

    println!("file: {} ({})", file.filename, file.id);
    println!("os: {os}");
    match ctx.resolver.native_path(&file, os) {
        NativePath::Unc(rest) => println!("native: unc //{rest}"),
        NativePath::UnixAbsolute(path) => println!("native: unix {path}"),
        NativePath::Unresolvable(raw) => println!("native: unresolvable {raw:?}"),
    }
    for line in describe_payload(&payload) {
        println!("  {line}");
    }
    Ok(())
}
