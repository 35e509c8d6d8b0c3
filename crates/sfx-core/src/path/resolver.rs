use serde::Serialize;
use std::fmt::{self, Display};

use super::{CatalogEndpoint, NativePath};
use crate::catalog::FileRecord;
use crate::os::{OsPreference, PathConvention};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UriKind {
    /// `file:` URI pointing at the file on disk or a network share.
    File,
    /// HTTP(S) URL on the catalog's audio endpoint.
    Network,
}

/// The URI placed into the transfer channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferUri {
    pub uri: String,
    pub kind: UriKind,
}

impl TransferUri {
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    pub fn is_file(&self) -> bool {
        self.kind == UriKind::File
    }
}

impl Display for TransferUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

/// Stateless: the same record and preference always give the same URI.
#[derive(Debug, Clone)]
pub struct PathResolver {
    endpoint: CatalogEndpoint,
}

impl PathResolver {
    pub fn new(endpoint: CatalogEndpoint) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &CatalogEndpoint {
        &self.endpoint
    }

    /// Pick the stored path for `pref` and classify it.
    pub fn native_path(&self, file: &FileRecord, pref: OsPreference) -> NativePath {
        let selected = match pref.path_convention() {
            PathConvention::Unc => &file.native_path_alternate,
            PathConvention::Unix => &file.native_path_primary,
        };
        NativePath::classify(selected)
    }

    pub fn resolve(&self, file: &FileRecord, pref: OsPreference) -> TransferUri {
        let native = self.native_path(file, pref);
        match native.to_file_uri() {
            Some(uri) => TransferUri {
                uri,
                kind: UriKind::File,
            },
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    file_id = %file.id,
                    os = %pref,
                    "no native path usable, falling back to catalog audio url"
                );
                TransferUri {
                    uri: self.endpoint.audio_url(&file.id),
                    kind: UriKind::Network,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> PathResolver {
        PathResolver::new(CatalogEndpoint::new("http://localhost:5000"))
    }

    fn boom(primary: &str, alternate: &str) -> FileRecord {
        FileRecord::new(7u64, "boom.wav", primary, alternate)
    }

    #[test]
    fn test_linux_resolves_primary_to_triple_slash_uri() {
        let uri = resolver().resolve(&boom("/data/lib/boom.wav", ""), OsPreference::Linux);
        assert_eq!(uri.as_str(), "file:///data/lib/boom.wav");
        assert!(uri.is_file());
    }

    #[test]
    fn test_mac_uses_primary_like_linux() {
        let file = boom("/data/lib/boom.wav", r"\\nas\lib\boom.wav");
        assert_eq!(
            resolver().resolve(&file, OsPreference::Mac),
            resolver().resolve(&file, OsPreference::Linux)
        );
    }

    #[test]
    fn test_windows_resolves_unc_alternate() {
        let file = boom("/data/lib/boom.wav", r"\\nas\lib\boom.wav");
        let uri = resolver().resolve(&file, OsPreference::Windows);
        assert_eq!(uri.as_str(), "file://nas/lib/boom.wav");
    }

    #[test]
    fn test_names_with_spaces_hash_and_percent_stay_one_path() {
        let file = FileRecord::new(
            7u64,
            "Door Slam #2.wav",
            "/sfx/Doors/Door Slam #2 (100%).wav",
            r"\\nas\sfx\Doors\Door Slam #2 (100%).wav",
        );

        let linux = resolver().resolve(&file, OsPreference::Linux);
        assert_eq!(
            linux.as_str(),
            "file:///sfx/Doors/Door%20Slam%20%232%20(100%25).wav"
        );
        assert!(!linux.as_str().contains('#'));

        let windows = resolver().resolve(&file, OsPreference::Windows);
        assert_eq!(
            windows.as_str(),
            "file://nas/sfx/Doors/Door%20Slam%20%232%20(100%25).wav"
        );
    }

    #[test]
    fn test_empty_primary_falls_back_to_network() {
        let uri = resolver().resolve(&boom("", ""), OsPreference::Linux);
        assert_eq!(uri.as_str(), "http://localhost:5000/api/audio/7");
        assert_eq!(uri.kind, UriKind::Network);
    }

    #[test]
    fn test_windows_without_alternate_falls_back_to_network() {
        let uri = resolver().resolve(&boom("/data/lib/boom.wav", ""), OsPreference::Windows);
        assert_eq!(uri.kind, UriKind::Network);
    }

    #[test]
    fn test_resolve_is_never_empty_and_idempotent() {
        let records = [
            boom("/data/lib/boom.wav", r"\\nas\lib\boom.wav"),
            boom("", ""),
            boom("relative/boom.wav", "//nas/lib/boom.wav"),
            boom(r"C:\boom.wav", r"\\\\nas\\lib"),
        ];
        let resolver = resolver();

        for file in &records {
            for pref in OsPreference::ALL {
                let first = resolver.resolve(file, pref);
                let second = resolver.resolve(file, pref);
                assert!(!first.as_str().is_empty());
                assert_eq!(first, second);

                match first.kind {
                    UriKind::File => {
                        let after_scheme = first.as_str().strip_prefix("file:").unwrap();
                        let slashes = after_scheme.chars().take_while(|c| *c == '/').count();
                        let expected = if pref == OsPreference::Windows { 2 } else { 3 };
                        assert_eq!(slashes, expected, "{first}");
                    }
                    UriKind::Network => {
                        assert!(first.as_str().starts_with("http://localhost:5000/api/audio/"));
                    }
                }
            }
        }
    }
}
