use crate::ids::FileId;

/// Base URL of the catalog service, e.g. `http://localhost:5000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEndpoint {
    base_url: String,
}

impl CatalogEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/audio/{id}`: raw bytes for one file.
    pub fn audio_url(&self, id: &FileId) -> String {
        format!("{}/api/audio/{}", self.base_url, id)
    }

    pub fn files_url(&self) -> String {
        format!("{}/api/files", self.base_url)
    }

    pub fn file_url(&self, id: &FileId) -> String {
        format!("{}/api/files/{}", self.base_url, id)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }
}

impl Default for CatalogEndpoint {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let endpoint = CatalogEndpoint::new("https://sfx.example.org//");
        assert_eq!(
            endpoint.audio_url(&FileId::from("7")),
            "https://sfx.example.org/api/audio/7"
        );
    }
}
