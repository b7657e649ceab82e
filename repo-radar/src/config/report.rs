//! Report configuration deserialization.

use serde::Deserialize;
use std::path::PathBuf;

/// Default GitHub REST API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// File the HTML report is written to when nothing else is configured.
pub const DEFAULT_HTML_OUTPUT: &str = "repository-analysis.html";

/// Parsed contents of an optional report `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ReportConfig {
    /// Presentation settings.
    #[serde(default)]
    pub report: ReportSettings,

    /// API client settings.
    #[serde(default)]
    pub github: GitHubSettings,
}

/// `[report]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ReportSettings {
    /// Page heading for the HTML report.
    #[serde(default = "default_title")]
    pub title: String,

    /// Line shown under the heading.
    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    /// Where the HTML report is written.
    #[serde(default = "default_html_output")]
    pub html_output: PathBuf,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            html_output: default_html_output(),
        }
    }
}

/// `[github]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GitHubSettings {
    /// Base URL of the REST API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
        }
    }
}

pub(crate) fn default_title() -> String {
    "Repo Radar".to_string()
}

pub(crate) fn default_subtitle() -> String {
    "Ranking repositories linked from your reading list".to_string()
}

pub(crate) fn default_html_output() -> PathBuf {
    PathBuf::from(DEFAULT_HTML_OUTPUT)
}

pub(crate) fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
