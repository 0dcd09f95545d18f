//! Loader and preference store error types.

use lexis_core::CoreError;
use thiserror::Error;

/// Errors that can occur while fetching a collection.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading a local file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The payload was not a JSON array of the expected shape.
    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from the file-backed preference store.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to access preferences at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("preferences at {path} are not a JSON object: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<PreferenceError> for CoreError {
    fn from(error: PreferenceError) -> Self {
        Self::Preference(error.to_string())
    }
}
