use clipboard_rs::ClipboardContent;
use percent_encoding::percent_decode_str;
use sfx_core::transfer::{TransferEntry, TransferFormat, TransferPayload};

/// Map a transfer payload onto clipboard formats.
///
/// Text entries keep their MIME name as the clipboard format, except
/// `text/plain` which uses the platform's native text format. A `file:` URI
/// is offered as a file list so file managers can paste it; on X11 that list
/// is itself the `text/uri-list` target.
/// The embedded audio is registered under its own MIME type.
pub fn clipboard_contents(payload: &TransferPayload) -> Vec<ClipboardContent> {
    let mut contents = Vec::with_capacity(payload.len() + 1);

    for (format, entry) in payload.iter() {
        match (format, entry) {
            (TransferFormat::TextPlain, TransferEntry::Text(text)) => {
                contents.push(ClipboardContent::Text(text.clone()));
            }
            (TransferFormat::UriList, TransferEntry::Text(uri)) => {
                push_uri_list(&mut contents, uri);
            }
            (_, TransferEntry::Text(text)) => {
                contents.push(ClipboardContent::Other(
                    format.mime_name().to_string(),
                    text.clone().into_bytes(),
                ));
            }
            (_, TransferEntry::File(file)) => {
                contents.push(ClipboardContent::Other(
                    file.mime.to_string(),
                    file.bytes.to_vec(),
                ));
            }
        }
    }

    contents
}

fn uri_list_entry(uri: &str) -> ClipboardContent {
    ClipboardContent::Other(
        TransferFormat::UriList.mime_name().to_string(),
        format!("{uri}\r\n").into_bytes(),
    )
}

// clipboard-rs serves a file list as `text/uri-list` on X11
#[cfg(target_os = "linux")]
fn push_uri_list(contents: &mut Vec<ClipboardContent>, uri: &str) {
    if uri.starts_with("file:") {
        contents.push(ClipboardContent::Files(vec![uri.to_string()]));
    } else {
        contents.push(uri_list_entry(uri));
    }
}

#[cfg(not(target_os = "linux"))]
fn push_uri_list(contents: &mut Vec<ClipboardContent>, uri: &str) {
    contents.push(uri_list_entry(uri));
    if let Some(path) = file_uri_to_local_path(uri) {
        contents.push(ClipboardContent::Files(vec![path]));
    }
}

/// `file:///Volumes/x.wav` → `/Volumes/x.wav`, `file://server/share/x.wav` →
/// `\\server\share\x.wav`. Percent escapes are decoded. `None` for anything
/// that is not a `file:` URI.
pub fn file_uri_to_local_path(uri: &str) -> Option<String> {
    let encoded = uri.strip_prefix("file://")?;
    let rest = percent_decode_str(encoded).decode_utf8().ok()?;
    if rest.starts_with('/') {
        return Some(rest.to_string());
    }
    if rest.is_empty() {
        return None;
    }
    Some(format!("\\\\{}", rest.replace('/', "\\")))
}
