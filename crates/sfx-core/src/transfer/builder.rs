use std::collections::BTreeMap;

use super::{AudioMime, CachedAudio, EmbeddedFile, TransferEntry, TransferFormat, TransferPayload};
use crate::catalog::FileRecord;
use crate::path::TransferUri;

/// Assembles the transfer payload for one drag. Pure, performs no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferPayloadBuilder;

impl TransferPayloadBuilder {
    pub fn new() -> Self {
        Self
    }

    /// `DownloadURL` descriptor: `<mime>:<filename>:<uri>`.
    pub fn download_descriptor(mime: &AudioMime, filename: &str, uri: &TransferUri) -> String {
        format!("{}:{}:{}", mime, filename, uri)
    }

    pub fn build(
        &self,
        file: &FileRecord,
        uri: &TransferUri,
        cached: Option<&CachedAudio>,
    ) -> TransferPayload {
        let inferred = AudioMime::from_filename(&file.filename);
        let mut entries = BTreeMap::new();

        entries.insert(TransferFormat::TextPlain, TransferEntry::Text(uri.to_string()));
        entries.insert(TransferFormat::UriList, TransferEntry::Text(uri.to_string()));
        entries.insert(
            TransferFormat::DownloadUrl,
            TransferEntry::Text(Self::download_descriptor(&inferred, &file.filename, uri)),
        );

        if let Some(cached) = cached {
            entries.insert(
                TransferFormat::File,
                TransferEntry::File(EmbeddedFile {
                    bytes: cached.bytes.clone(),
                    filename: file.filename.clone(),
                    mime: cached.mime.clone(),
                }),
            );
        }

        TransferPayload::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{CatalogEndpoint, PathResolver};
    use crate::os::OsPreference;
    use crate::transfer::DropEffect;

    fn boom() -> FileRecord {
        FileRecord::new(7u64, "boom.wav", "/data/lib/boom.wav", r"\\nas\lib\boom.wav")
    }

    fn linux_uri(file: &FileRecord) -> TransferUri {
        PathResolver::new(CatalogEndpoint::default()).resolve(file, OsPreference::Linux)
    }

    #[test]
    fn test_uri_only_payload_has_three_text_formats() {
        let file = boom();
        let uri = linux_uri(&file);
        let payload = TransferPayloadBuilder::new().build(&file, &uri, None);

        assert_eq!(payload.len(), 3);
        assert_eq!(payload.text(TransferFormat::TextPlain), Some("file:///data/lib/boom.wav"));
        assert_eq!(payload.text(TransferFormat::UriList), Some("file:///data/lib/boom.wav"));
        assert_eq!(
            payload.text(TransferFormat::DownloadUrl),
            Some("audio/wav:boom.wav:file:///data/lib/boom.wav")
        );
        assert!(payload.file().is_none());
        assert_eq!(payload.effect(), DropEffect::Copy);
    }

    #[test]
    fn test_cached_audio_is_embedded_as_file_entry() {
        let file = boom();
        let uri = linux_uri(&file);
        let cached = CachedAudio::new(vec![1u8, 2, 3], AudioMime("audio/x-wav".into()));

        let payload = TransferPayloadBuilder::new().build(&file, &uri, Some(&cached));

        assert_eq!(payload.len(), 4);
        let embedded = payload.file().unwrap();
        assert_eq!(embedded.bytes.as_ref(), &[1, 2, 3]);
        assert_eq!(embedded.filename, "boom.wav");
        // file entry keeps the served type, the descriptor keeps the inferred one
        assert_eq!(embedded.mime.as_str(), "audio/x-wav");
        assert!(payload
            .text(TransferFormat::DownloadUrl)
            .unwrap()
            .starts_with("audio/wav:"));
    }

    #[test]
    fn test_network_uri_flows_into_every_text_entry() {
        let file = FileRecord::new(7u64, "boom.wav", "", "");
        let uri = linux_uri(&file);
        let payload = TransferPayloadBuilder::new().build(&file, &uri, None);

        for format in [TransferFormat::TextPlain, TransferFormat::UriList] {
            assert_eq!(payload.text(format), Some("http://localhost:5000/api/audio/7"));
        }
        assert_eq!(
            payload.text(TransferFormat::DownloadUrl),
            Some("audio/wav:boom.wav:http://localhost:5000/api/audio/7")
        );
    }

    #[test]
    fn test_formats_iterate_in_install_order() {
        let file = boom();
        let uri = linux_uri(&file);
        let cached = CachedAudio::new(vec![0u8], AudioMime::from_filename("boom.wav"));
        let payload = TransferPayloadBuilder::new().build(&file, &uri, Some(&cached));

        let formats: Vec<_> = payload.formats().collect();
        assert_eq!(
            formats,
            vec![
                TransferFormat::TextPlain,
                TransferFormat::UriList,
                TransferFormat::DownloadUrl,
                TransferFormat::File,
            ]
        );
    }
}
