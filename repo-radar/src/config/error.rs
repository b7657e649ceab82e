//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while building a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse report config '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Validation error in a config value.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },

    /// Missing required file.
    #[error("Missing required file: {path}")]
    MissingFile { path: String },

    /// No GitHub token was supplied.
    #[error(
        "GitHub token not found; set your token in the GITHUB_TOKEN environment variable"
    )]
    MissingToken,

    /// The fetch budget must allow at least one call.
    #[error("max-calls must be a positive number, got {0}")]
    InvalidMaxCalls(u32),

    /// The output format is not one of `markdown` or `html`.
    #[error("Invalid output format '{0}'; expected 'markdown' or 'html'")]
    InvalidFormat(String),

    /// No input document was named.
    #[error("No input given; pass one of --url, --url-file or --markdown")]
    MissingInput,
}
