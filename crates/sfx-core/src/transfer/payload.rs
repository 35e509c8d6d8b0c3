use bytes::Bytes;
use std::collections::BTreeMap;
use std::fmt;

use super::AudioMime;

/// Audio bytes held by a prefetch cache, with the MIME type the service reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedAudio {
    pub bytes: Bytes,
    pub mime: AudioMime,
}

impl CachedAudio {
    pub fn new(bytes: impl Into<Bytes>, mime: AudioMime) -> Self {
        Self {
            bytes: bytes.into(),
            mime,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Native transfer formats, in the order they are installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransferFormat {
    TextPlain,
    UriList,
    DownloadUrl,
    File,
}

impl TransferFormat {
    pub fn mime_name(&self) -> &'static str {
        match self {
            TransferFormat::TextPlain => "text/plain",
            TransferFormat::UriList => "text/uri-list",
            TransferFormat::DownloadUrl => "DownloadURL",
            TransferFormat::File => "Files",
        }
    }
}

impl fmt::Display for TransferFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedFile {
    pub bytes: Bytes,
    pub filename: String,
    pub mime: AudioMime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferEntry {
    Text(String),
    File(EmbeddedFile),
}

impl TransferEntry {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TransferEntry::Text(text) => Some(text),
            TransferEntry::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&EmbeddedFile> {
        match self {
            TransferEntry::File(file) => Some(file),
            TransferEntry::Text(_) => None,
        }
    }
}

/// What the receiving application is allowed to do with the drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    Copy,
}

/// A flat format to entry map, installed into the transfer channel in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPayload {
    entries: BTreeMap<TransferFormat, TransferEntry>,
    effect: DropEffect,
}

impl TransferPayload {
    pub(crate) fn new(entries: BTreeMap<TransferFormat, TransferEntry>) -> Self {
        Self {
            entries,
            effect: DropEffect::Copy,
        }
    }

    pub fn get(&self, format: TransferFormat) -> Option<&TransferEntry> {
        self.entries.get(&format)
    }

    pub fn text(&self, format: TransferFormat) -> Option<&str> {
        self.get(format).and_then(TransferEntry::as_text)
    }

    pub fn file(&self) -> Option<&EmbeddedFile> {
        self.get(TransferFormat::File).and_then(TransferEntry::as_file)
    }

    pub fn contains(&self, format: TransferFormat) -> bool {
        self.entries.contains_key(&format)
    }

    pub fn formats(&self) -> impl Iterator<Item = TransferFormat> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TransferFormat, &TransferEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn effect(&self) -> DropEffect {
        self.effect
    }
}
