use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Catalog file identifier.
///
/// Opaque to this crate. The catalog serves numeric ids, so both JSON numbers
/// and strings are accepted on the wire and kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawFileId")]
pub struct FileId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFileId {
    Number(u64),
    Text(String),
}

impl From<RawFileId> for FileId {
    fn from(raw: RawFileId) -> Self {
        match raw {
            RawFileId::Number(n) => Self(n.to_string()),
            RawFileId::Text(s) => Self(s),
        }
    }
}

impl FileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for FileId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FileId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FileId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for FileId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl AsRef<str> for FileId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
