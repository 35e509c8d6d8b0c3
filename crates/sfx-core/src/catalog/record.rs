use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::FileId;

/// A sound file as indexed by the catalog service.
///
/// `native_path_primary` is the Unix-style absolute path the scanner stored
/// (served as `filepath` by the catalog backend). `native_path_alternate` is
/// the Windows UNC view of the same file and may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: FileId,
    pub filename: String,

    #[serde(default, alias = "filepath", deserialize_with = "null_as_empty")]
    pub native_path_primary: String,

    #[serde(default, alias = "unc_path", deserialize_with = "null_as_empty")]
    pub native_path_alternate: String,

    #[serde(default)]
    pub duration_seconds: Option<u64>,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub checksum: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl FileRecord {
    /// Minimal record carrying only what drag export needs.
    pub fn new(
        id: impl Into<FileId>,
        filename: impl Into<String>,
        native_path_primary: impl Into<String>,
        native_path_alternate: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
            native_path_primary: native_path_primary.into(),
            native_path_alternate: native_path_alternate.into(),
            duration_seconds: None,
            length: None,
            tags: Vec::new(),
            notes: None,
            project: None,
            checksum: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_catalog_json_uses_filepath_alias() {
        let json = r#"{
            "id": 7,
            "filename": "boom.wav",
            "filepath": "/data/lib/boom.wav",
            "duration_seconds": 3,
            "length": "00:03",
            "tags": ["impact", "explosion"],
            "notes": null,
            "project": "demo",
            "checksum": "abc",
            "mtime": 1700000000.0,
            "created_at": "2024-01-01T00:00:00",
            "updated_at": null
        }"#;

        let record: FileRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, FileId::from("7"));
        assert_eq!(record.native_path_primary, "/data/lib/boom.wav");
        assert_eq!(record.native_path_alternate, "");
        assert_eq!(record.tags, vec!["impact", "explosion"]);
        assert_eq!(record.notes, None);
    }

    #[test]
    fn test_record_null_alternate_path_is_empty() {
        let json = r#"{
            "id": "x",
            "filename": "a.mp3",
            "native_path_primary": "/a.mp3",
            "native_path_alternate": null
        }"#;

        let record: FileRecord = serde_json::from_str(json).unwrap();
        assert!(record.native_path_alternate.is_empty());
    }
}
