//! Error types surfaced by the catalog client and the favorites store.

use thiserror::Error;

/// Failure of a catalog request.
///
/// Callers treat every variant the same way: the operation failed and is
/// not retried. The variants only exist so logs say what went wrong.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Jikan API error: {status} - {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to read or write durable favorites storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize favorites: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Anime {0} not found")]
    NotFound(crate::domain::AnimeId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
