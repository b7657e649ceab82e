//! Configuration loading.
//!
//! The run itself is configured through [`crate::RunnerConfig`]; this module
//! parses the optional `config.toml` that tunes the report and the API client.

mod error;
mod report;

pub use error::ConfigError;
pub use report::{
    GitHubSettings, ReportConfig, ReportSettings, DEFAULT_API_BASE_URL, DEFAULT_HTML_OUTPUT,
};

use std::path::Path;
use tracing::{debug, info};

/// Loads a report configuration file.
///
/// Every key is optional, so an empty file yields [`ReportConfig::default`].
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing, unreadable, not valid TOML,
/// or carries an unusable value.
pub fn load_report_config(path: &Path) -> Result<ReportConfig, ConfigError> {
    info!(path = %path.display(), "Loading report config");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let config: ReportConfig = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
        path: path.display().to_string(),
        source: e,
    })?;

    validate(&config, path)?;
    debug!(title = %config.report.title, "Loaded report config");
    Ok(config)
}

fn validate(config: &ReportConfig, path: &Path) -> Result<(), ConfigError> {
    let invalid = |message: &str| ConfigError::ValidationError {
        path: path.display().to_string(),
        message: message.to_string(),
    };

    if url::Url::parse(&config.github.api_base_url).is_err() {
        return Err(invalid("github.api-base-url is not a valid URL"));
    }
    if config.report.html_output.as_os_str().is_empty() {
        return Err(invalid("report.html-output cannot be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn can_load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[report]
title = "AI Agent Repo Radar"
subtitle = "Scanning the AI agent landscape"
html-output = "radar.html"

[github]
api-base-url = "https://github.example.com/api/v3"
"#,
        )
        .unwrap();

        let config = load_report_config(&path).unwrap();

        assert_eq!(config.report.title, "AI Agent Repo Radar");
        assert_eq!(config.report.subtitle, "Scanning the AI agent landscape");
        assert_eq!(config.report.html_output, Path::new("radar.html"));
        assert_eq!(
            config.github.api_base_url,
            "https://github.example.com/api/v3"
        );
    }

    #[test]
    fn empty_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = load_report_config(&path).unwrap();

        assert_eq!(config.report.title, "Repo Radar");
        assert_eq!(config.report.html_output, Path::new(DEFAULT_HTML_OUTPUT));
        assert_eq!(config.github.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn missing_config_file() {
        let temp = TempDir::new().unwrap();

        let result = load_report_config(&temp.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }

    #[test]
    fn rejects_unknown_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[report]\ncolour = \"red\"\n").unwrap();

        let result = load_report_config(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn user_agent_is_not_configurable() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[github]\nuser-agent = \"radar\"\n").unwrap();

        let result = load_report_config(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn rejects_invalid_api_base_url() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[github]\napi-base-url = \"not a url\"\n").unwrap();

        let result = load_report_config(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
