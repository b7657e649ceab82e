//! Metadata fetch error types.

use serde::Deserialize;
use thiserror::Error;

/// Body of a GitHub API error response.
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Errors that can occur while fetching one repository's metadata.
///
/// None of these abort a run; the repository is left out of the report.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The token was rejected (HTTP 401).
    #[error(
        "Authentication failed; check that GITHUB_TOKEN is set correctly, has not expired, \
         and has public_repo access"
    )]
    Unauthorized,

    /// The rate limit was exhausted (HTTP 403 mentioning a rate limit).
    #[error("API rate limit exceeded ({message}); consider waiting or using a token with higher rate limits")]
    RateLimited { message: String },

    /// Access was refused for another reason (HTTP 403).
    #[error("Resource forbidden: {message}")]
    Forbidden { message: String },

    /// The repository does not exist or is private (HTTP 404).
    #[error("Repository not found; check the URL is correct and the repository is public")]
    NotFound,

    /// Any other non-success status.
    #[error("Server responded with status {status}: {message}")]
    Status { status: u16, message: String },

    /// No usable response was received.
    #[error("No usable response from GitHub API: {0}")]
    Request(String),

    /// A successful response did not hold a repository.
    #[error("Unexpected repository payload from GitHub API: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Classifies a non-success HTTP status and its response message.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 => Self::Unauthorized,
            403 if message.to_lowercase().contains("rate limit") => Self::RateLimited { message },
            403 => Self::Forbidden { message },
            404 => Self::NotFound,
            _ => Self::Status { status, message },
        }
    }

    /// Classifies a non-success response from its status and raw body.
    ///
    /// GitHub error bodies are JSON with a `message` field; anything else
    /// (an HTML page from a proxy, an empty body) is reported as-is.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(error) => error.message,
            Err(_) => body.trim().to_string(),
        };
        Self::from_status(status, message)
    }

    /// Returns true if retrying later could succeed without any change to the input.
    #[must_use]
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

impl From<octocrab::Error> for FetchError {
    fn from(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => {
                Self::from_status(source.status_code.as_u16(), source.message.clone())
            }
            other => Self::Request(other.to_string()),
        }
    }
}
