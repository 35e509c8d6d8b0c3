use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}

#[derive(Debug, Error)]
pub enum PreferenceStorageError {
    #[error("preference storage io failed: {0}")]
    Io(String),

    #[error("stored preference is corrupt: {0}")]
    Corrupt(String),
}

#[derive(Debug, Error)]
pub enum AudioFetchError {
    #[error("audio {id} not found")]
    NotFound { id: String },

    #[error("catalog returned http {status} for audio {id}")]
    Status { id: String, status: u16 },

    #[error("audio request failed: {0}")]
    Transport(String),

    #[error("audio is {size} bytes, over the {limit} byte prefetch limit")]
    TooLarge { size: u64, limit: u64 },
}

#[derive(Debug, Error)]
pub enum TransferChannelError {
    #[error("transfer channel unavailable: {0}")]
    Unavailable(String),

    #[error("failed to install transfer payload: {0}")]
    Install(String),
}

#[derive(Debug, Error)]
pub enum DragImageError {
    #[error("drag image surface unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog record {0} not found")]
    NotFound(String),

    #[error("catalog returned http {0}")]
    Status(u16),

    #[error("catalog request failed: {0}")]
    Transport(String),

    #[error("catalog response could not be decoded: {0}")]
    Decode(String),
}
