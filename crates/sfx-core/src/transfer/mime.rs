use serde::{Deserialize, Serialize};
use std::fmt;

/// Audio MIME type inferred from a filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioMime(pub String);

impl AudioMime {
    /// Used for unknown extensions.
    pub const FALLBACK: &'static str = "audio/mpeg";

    pub fn from_filename(filename: &str) -> Self {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());

        let mime = match extension.as_deref() {
            Some("wav") => "audio/wav",
            Some("mp3") => "audio/mpeg",
            Some("ogg") => "audio/ogg",
            Some("flac") => "audio/flac",
            Some("m4a") => "audio/mp4",
            Some("aac") => "audio/aac",
            Some("aiff") | Some("aif") => "audio/aiff",
            _ => Self::FALLBACK,
        };
        Self(mime.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AudioMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
