//! Source document error types.

use thiserror::Error;

/// Errors that can occur while loading source documents.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to read a local file.
    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A source URL could not be parsed.
    #[error("Invalid source URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("Fetching '{url}' failed with status {status}")]
    Status { url: String, status: u16 },

    /// The request could not be completed.
    #[error("Fetching '{url}' failed: {message}")]
    Request { url: String, message: String },
}
