//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by an `AssetSource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssetError {
    #[error("asset {name:?} not found")]
    NotFound { name: String },
    #[error("asset {name:?} is empty")]
    Empty { name: String },
    #[error("failed to read asset {name:?}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors emitted while starting background audio.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AudioError {
    #[error("unsupported audio format for {name:?}")]
    Unsupported { name: String },
    #[error("audio sink rejected playback: {0}")]
    Sink(String),
    #[error(transparent)]
    Asset(#[from] AssetError),
}
