//! HTTP client for the catalog service.
//!
//! Consumes `GET /api/files`, `GET /api/files/{id}`, `GET /api/audio/{id}` and
//! `GET /health`. The mutating endpoints belong to the browser UI.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};
use tracing::{debug, info_span, Instrument};

use sfx_core::catalog::{FileQuery, FileRecord};
use sfx_core::ports::{AudioFetchError, AudioSourcePort, CatalogError, CatalogHealth, CatalogPort};
use sfx_core::{AudioMime, CachedAudio, CatalogEndpoint, FileId};

pub struct HttpCatalogClient {
    client: reqwest::Client,
    endpoint: CatalogEndpoint,
    max_audio_bytes: Option<u64>,
}

impl HttpCatalogClient {
    pub fn new(endpoint: CatalogEndpoint, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build catalog http client failed")?;
        Ok(Self {
            client,
            endpoint,
            max_audio_bytes: None,
        })
    }

    /// Refuse audio bodies larger than `limit` bytes.
    pub fn with_max_audio_bytes(mut self, limit: u64) -> Self {
        self.max_audio_bytes = Some(limit);
        self
    }

    pub fn endpoint(&self) -> &CatalogEndpoint {
        &self.endpoint
    }

    fn check_size(&self, size: u64) -> Result<(), AudioFetchError> {
        match self.max_audio_bytes {
            Some(limit) if size > limit => Err(AudioFetchError::TooLarge { size, limit }),
            _ => Ok(()),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        response: Result<Response, reqwest::Error>,
        not_found_id: Option<&FileId>,
    ) -> Result<T, CatalogError> {
        let response = response.map_err(|e| CatalogError::Transport(e.to_string()))?;
        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(CatalogError::NotFound(
                    not_found_id.map(FileId::to_string).unwrap_or_default(),
                ))
            }
            status if !status.is_success() => return Err(CatalogError::Status(status.as_u16())),
            _ => {}
        }
        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

/// Served `audio/*` content type without parameters, if any.
fn served_audio_mime(response: &Response) -> Option<AudioMime> {
    let value = response.headers().get(CONTENT_TYPE)?.to_str().ok()?;
    let mime = value.split(';').next()?.trim().to_ascii_lowercase();
    mime.starts_with("audio/").then(|| AudioMime(mime))
}

#[async_trait]
impl AudioSourcePort for HttpCatalogClient {
    async fn fetch_audio(&self, id: &FileId) -> Result<CachedAudio, AudioFetchError> {
        let url = self.endpoint.audio_url(id);
        let span = info_span!("infra.catalog.fetch_audio", file_id = %id);
        async {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| AudioFetchError::Transport(e.to_string()))?;

            match response.status() {
                StatusCode::NOT_FOUND => {
                    return Err(AudioFetchError::NotFound { id: id.to_string() })
                }
                status if !status.is_success() => {
                    return Err(AudioFetchError::Status {
                        id: id.to_string(),
                        status: status.as_u16(),
                    })
                }
                _ => {}
            }

            if let Some(length) = response.content_length() {
                self.check_size(length)?;
            }

            let mime = served_audio_mime(&response)
                .unwrap_or_else(|| AudioMime(AudioMime::FALLBACK.to_string()));
            let bytes = response
                .bytes()
                .await
                .map_err(|e| AudioFetchError::Transport(e.to_string()))?;
            self.check_size(bytes.len() as u64)?;

            debug!(size = bytes.len(), mime = %mime, "fetched audio");
            Ok(CachedAudio::new(bytes, mime))
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl CatalogPort for HttpCatalogClient {
    async fn list_files(&self, query: &FileQuery) -> Result<Vec<FileRecord>, CatalogError> {
        let span = info_span!("infra.catalog.list_files", q = ?query.q);
        async {
            let response = self
                .client
                .get(self.endpoint.files_url())
                .query(&query.to_query_pairs())
                .send()
                .await;
            let files: Vec<FileRecord> = self.get_json(response, None).await?;
            debug!(count = files.len(), "listed catalog files");
            Ok(files)
        }
        .instrument(span)
        .await
    }

    async fn get_file(&self, id: &FileId) -> Result<FileRecord, CatalogError> {
        let response = self.client.get(self.endpoint.file_url(id)).send().await;
        self.get_json(response, Some(id))
            .instrument(info_span!("infra.catalog.get_file", file_id = %id))
            .await
    }

    async fn health(&self) -> Result<CatalogHealth, CatalogError> {
        let response = self.client.get(self.endpoint.health_url()).send().await;
        self.get_json(response, None).await
    }
}
