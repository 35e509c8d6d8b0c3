//! Command handlers. Each prints its result on stdout.

mod catalog;
mod export;
mod os;
mod resolve;

pub use catalog::{run_health, run_list};
pub use export::{run_export, ExportOptions};
pub use os::run_os;
pub use resolve::run_resolve;

use sfx_core::transfer::{TransferEntry, TransferPayload};

/// One line per payload entry, binary entries summarized.
pub(crate) fn describe_payload(payload: &TransferPayload) -> Vec<String> {
    payload
        .iter()
        .map(|(format, entry)| match entry {
            TransferEntry::Text(text) => format!("{format}: {text}"),
            TransferEntry::File(file) => format!(
                "{format}: {} ({}, {} bytes)",
                file.filename,
                file.mime,
                file.bytes.len()
            ),
        })
        .collect()
}
