use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::{FileQuery, FileRecord};
use crate::ids::FileId;
use crate::ports::errors::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogHealth {
    pub status: String,
    /// Library root the catalog scans, when the service reports it.
    #[serde(default)]
    pub root_mount: Option<String>,
}

impl CatalogHealth {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Read side of the catalog service.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    async fn list_files(&self, query: &FileQuery) -> Result<Vec<FileRecord>, CatalogError>;
    async fn get_file(&self, id: &FileId) -> Result<FileRecord, CatalogError>;
    async fn health(&self) -> Result<CatalogHealth, CatalogError>;
}
