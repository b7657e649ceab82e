//! Runner configuration.

use crate::config::{ConfigError, ReportConfig};
use crate::input::SourceSpec;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable the token is read from.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Default fetch budget.
pub const DEFAULT_MAX_CALLS: u32 = 5;

/// Shape of the run's output artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Markdown table on stdout.
    #[default]
    Markdown,
    /// Self-contained HTML page written to a file.
    Html,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => f.write_str("markdown"),
            Self::Html => f.write_str("html"),
        }
    }
}

/// Configuration for one radar run.
///
/// Construction validates everything that must hold before any network
/// activity: a non-blank token and a positive fetch budget.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Where repository links are read from.
    source: SourceSpec,
    /// GitHub token used for API calls.
    token: String,
    /// Output artifact shape.
    format: OutputFormat,
    /// Maximum number of metadata requests.
    max_calls: u32,
    /// Report presentation and API settings.
    report: ReportConfig,
    /// Overrides the configured HTML destination.
    html_output: Option<PathBuf>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] if `token` is blank, or
    /// [`ConfigError::InvalidMaxCalls`] if `max_calls` is zero.
    pub fn new(
        source: SourceSpec,
        token: impl Into<String>,
        format: OutputFormat,
        max_calls: u32,
    ) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        if max_calls == 0 {
            return Err(ConfigError::InvalidMaxCalls(max_calls));
        }

        Ok(Self {
            source,
            token,
            format,
            max_calls,
            report: ReportConfig::default(),
            html_output: None,
        })
    }

    /// Creates a configuration with the token taken from `GITHUB_TOKEN`.
    ///
    /// # Errors
    ///
    /// Same as [`RunnerConfig::new`]; an unset variable is a missing token.
    pub fn from_env(
        source: SourceSpec,
        format: OutputFormat,
        max_calls: u32,
    ) -> Result<Self, ConfigError> {
        let token = std::env::var(TOKEN_ENV_VAR).unwrap_or_default();
        Self::new(source, token, format, max_calls)
    }

    /// Sets the report configuration.
    #[must_use]
    pub fn with_report(mut self, report: ReportConfig) -> Self {
        self.report = report;
        self
    }

    /// Overrides where the HTML page is written.
    #[must_use]
    pub fn with_html_output(mut self, path: PathBuf) -> Self {
        self.html_output = Some(path);
        self
    }

    /// Returns the source spec.
    pub fn source(&self) -> &SourceSpec {
        &self.source
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the fetch budget.
    pub fn max_calls(&self) -> u32 {
        self.max_calls
    }

    /// Returns the report configuration.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }

    /// Returns where the HTML page is written.
    pub fn html_output(&self) -> &Path {
        self.html_output
            .as_deref()
            .unwrap_or(&self.report.report.html_output)
    }
}
