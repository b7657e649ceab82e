//! Runner error types.

/// Errors that abort a radar run.
///
/// Per-repository fetch failures are not here: they are logged, recorded in
/// the summary and the run continues.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The source list or Markdown file could not be read.
    #[error(transparent)]
    Source(#[from] crate::input::SourceError),

    /// Report rendering errors.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Every source document failed to load.
    #[error("No source documents could be loaded ({failed} failed)")]
    NoDocuments { failed: usize },

    /// Failed to write the output artifact.
    #[error("Failed to write '{path}': {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl RunnerError {
    /// Returns true for errors caught before any network activity.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Source(crate::input::SourceError::InvalidUrl { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::input::SourceError;

    #[test]
    fn config_errors_are_classified() {
        assert!(RunnerError::from(ConfigError::MissingToken).is_config());
        assert!(RunnerError::from(SourceError::InvalidUrl {
            url: "ftp://example.com/list.md".to_string(),
            message: "unsupported scheme 'ftp'".to_string(),
        })
        .is_config());
        assert!(!RunnerError::NoDocuments { failed: 2 }.is_config());
    }
}
