//! Orchestrates a radar run: read sources, extract links, fetch, score, rank.

mod config;
mod error;

pub use config::{OutputFormat, RunnerConfig, DEFAULT_MAX_CALLS, TOKEN_ENV_VAR};
pub use error::RunnerError;

use crate::extract::RepositorySet;
use crate::input::{load_sources, DocumentSource};
use crate::metadata::{fetch_record, GitHubClient, MetadataSource};
use crate::record::RepositoryRecord;
use crate::score::rank_records;
use crate::summary::{FetchOutcome, RunSummary};
use crate::templates::TemplateRenderer;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RadarReport {
    /// Fetched records, highest score first.
    pub records: Vec<RepositoryRecord>,
    /// Counters for the run.
    pub summary: RunSummary,
    /// One outcome per extracted reference, in first-seen order.
    pub outcomes: Vec<FetchOutcome>,
    /// The instant every record was scored against.
    pub generated_at: DateTime<Utc>,
}

/// A rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputArtifact {
    /// Markdown table, for the caller to print.
    Markdown(String),
    /// HTML page already written to this path.
    Html(PathBuf),
}

/// Runs the radar pipeline against a metadata and document client.
pub struct Runner<C = GitHubClient> {
    config: RunnerConfig,
    client: C,
    renderer: TemplateRenderer,
}

impl Runner<GitHubClient> {
    /// Builds a runner talking to the GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Octocrab`] if the HTTP client can't be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let client = GitHubClient::new(config.token(), &config.report().github)?;
        Ok(Self::with_client(config, client))
    }
}

impl<C> Runner<C>
where
    C: MetadataSource + DocumentSource,
{
    /// Builds a runner around an existing client.
    pub fn with_client(config: RunnerConfig, client: C) -> Self {
        Self {
            config,
            client,
            renderer: TemplateRenderer::new(),
        }
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Returns the client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Executes the pipeline, scoring against the current time.
    ///
    /// # Errors
    ///
    /// See [`Runner::run_at`].
    pub async fn run(&self) -> Result<RadarReport, RunnerError> {
        self.run_at(Utc::now()).await
    }

    /// Executes the pipeline, scoring every record against `now`.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Source`] if the source file can't be read and
    /// [`RunnerError::NoDocuments`] if no source document loaded. Failed
    /// metadata fetches are recorded in the report, not returned.
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<RadarReport, RunnerError> {
        let max_calls = self.config.max_calls() as usize;
        let mut summary = RunSummary::new(max_calls);

        let loaded = load_sources(&self.client, self.config.source()).await?;
        summary.sources_loaded = loaded.documents.len();
        summary.sources_failed = loaded.failures.len();

        if loaded.documents.is_empty() {
            return Err(RunnerError::NoDocuments {
                failed: loaded.failures.len(),
            });
        }

        let mut references = RepositorySet::new();
        for document in &loaded.documents {
            let added = references.extend_from_text(&document.content);
            debug!(origin = %document.origin, added, "Extracted repository links");
        }
        summary.repositories_found = references.len();

        if references.is_empty() {
            warn!("No repository links found");
        } else {
            info!(count = references.len(), max_calls, "Found repositories");
        }

        let mut records = Vec::new();
        let mut outcomes = Vec::with_capacity(references.len());

        for (index, reference) in references.iter().enumerate() {
            let repository = reference.url();

            let outcome = if index >= max_calls {
                FetchOutcome::Skipped { repository }
            } else {
                info!(repo = %reference, attempt = index + 1, max_calls, "Fetching repository");
                match fetch_record(&self.client, reference, now).await {
                    Ok(record) => {
                        debug!(repo = %reference, score = record.aggregate_score, "Scored repository");
                        let outcome = FetchOutcome::Fetched {
                            repository,
                            score: record.aggregate_score,
                        };
                        records.push(record);
                        outcome
                    }
                    Err(e) => {
                        if e.is_rate_limit() {
                            warn!(repo = %reference, "Rate limited; later requests will likely fail too");
                        }
                        error!(repo = %reference, error = %e, "Failed to fetch repository");
                        FetchOutcome::Failed {
                            repository,
                            error: e.to_string(),
                        }
                    }
                }
            };

            summary.record_outcome(&outcome);
            outcomes.push(outcome);
        }

        if summary.budget_exhausted() {
            warn!(
                skipped = summary.repositories_skipped,
                max_calls, "Fetch budget exhausted; remaining repositories were not fetched"
            );
        }

        rank_records(&mut records);

        Ok(RadarReport {
            records,
            summary,
            outcomes,
            generated_at: now,
        })
    }

    /// Renders `report` in the configured format.
    ///
    /// HTML is written to [`RunnerConfig::html_output`]; Markdown is
    /// returned for the caller to print.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Template`] if rendering fails or
    /// [`RunnerError::Output`] if the HTML file can't be written.
    pub fn render(&self, report: &RadarReport) -> Result<OutputArtifact, RunnerError> {
        match self.config.format() {
            OutputFormat::Markdown => Ok(OutputArtifact::Markdown(
                self.renderer.render_markdown(&report.records)?,
            )),
            OutputFormat::Html => {
                let settings = &self.config.report().report;
                let html = self.renderer.render_html(
                    &report.records,
                    &settings.title,
                    &settings.subtitle,
                    report.generated_at,
                )?;

                let path = self.config.html_output();
                std::fs::write(path, html).map_err(|e| RunnerError::Output {
                    path: path.display().to_string(),
                    source: e,
                })?;

                info!(path = %path.display(), "Wrote HTML report");
                Ok(OutputArtifact::Html(path.to_path_buf()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::RepositoryRef;
    use crate::input::{SourceError, SourceSpec};
    use crate::metadata::{FetchError, RepositoryPayload};
    use crate::templates::MARKDOWN_HEADER;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tempfile::TempDir;
    use url::Url;

    const SOURCE_URL: &str = "https://example.com/awesome.md";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    /// Serves one document and a payload per repository name; unknown names are 404.
    #[derive(Default)]
    struct FakeClient {
        document: Option<String>,
        stars: HashMap<String, u64>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeClient {
        fn new(document: &str) -> Self {
            Self {
                document: Some(document.to_string()),
                ..Default::default()
            }
        }

        fn with_repo(mut self, name: &str, stars: u64) -> Self {
            self.stars.insert(name.to_string(), stars);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MetadataSource for FakeClient {
        async fn fetch_repository(
            &self,
            reference: &RepositoryRef,
        ) -> Result<RepositoryPayload, FetchError> {
            self.calls.lock().unwrap().push(reference.full_name());
            let stars = *self.stars.get(&reference.name).ok_or(FetchError::NotFound)?;
            Ok(RepositoryPayload {
                name: reference.name.clone(),
                description: None,
                stargazers_count: stars,
                forks_count: 0,
                watchers_count: 0,
                created_at: now() - Duration::days(365),
                updated_at: now(),
                pushed_at: None,
                topics: None,
            })
        }
    }

    #[async_trait]
    impl DocumentSource for FakeClient {
        async fn fetch_document(&self, url: &Url) -> Result<String, SourceError> {
            self.document.clone().ok_or_else(|| SourceError::Status {
                url: url.to_string(),
                status: 500,
            })
        }
    }

    fn config(format: OutputFormat, max_calls: u32) -> RunnerConfig {
        RunnerConfig::new(
            SourceSpec::from_url(SOURCE_URL).unwrap(),
            "ghp_test",
            format,
            max_calls,
        )
        .unwrap()
    }

    fn links(names: &[&str]) -> String {
        names
            .iter()
            .map(|name| format!("- [{name}](https://github.com/octo/{name})\n"))
            .collect()
    }

    #[tokio::test]
    async fn fetches_at_most_max_calls_in_first_seen_order() {
        let client = FakeClient::new(&links(&["a", "b", "c", "d", "e", "f", "g"]))
            .with_repo("a", 1)
            .with_repo("b", 2)
            .with_repo("c", 3)
            .with_repo("d", 4)
            .with_repo("e", 5)
            .with_repo("f", 6)
            .with_repo("g", 7);
        let runner = Runner::with_client(config(OutputFormat::Markdown, 5), client);

        let report = runner.run_at(now()).await.unwrap();

        assert_eq!(
            runner.client().calls(),
            vec!["octo/a", "octo/b", "octo/c", "octo/d", "octo/e"]
        );
        assert_eq!(report.records.len(), 5);
        assert_eq!(report.summary.fetch_attempts, 5);
        assert_eq!(report.summary.repositories_skipped, 2);
        assert_eq!(report.outcomes.len(), 7);
        assert!(report.summary.budget_exhausted());
    }

    #[tokio::test]
    async fn failed_fetches_consume_budget() {
        // "x" and "y" are unknown to the fake and fail with 404.
        let client = FakeClient::new(&links(&["x", "y", "a", "b"]))
            .with_repo("a", 1)
            .with_repo("b", 2);
        let runner = Runner::with_client(config(OutputFormat::Markdown, 3), client);

        let report = runner.run_at(now()).await.unwrap();

        assert_eq!(runner.client().calls().len(), 3);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.summary.fetch_failures, 2);
        assert!(report.summary.has_failures());
        assert!(matches!(report.outcomes[3], FetchOutcome::Skipped { .. }));
    }

    #[tokio::test]
    async fn records_are_ranked_by_score() {
        let client = FakeClient::new(&links(&["low", "high", "mid"]))
            .with_repo("low", 10)
            .with_repo("high", 1_000)
            .with_repo("mid", 100);
        let runner = Runner::with_client(config(OutputFormat::Markdown, 5), client);

        let report = runner.run_at(now()).await.unwrap();
        let names: Vec<&str> = report.records.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["high", "mid", "low"]);
        assert!(report
            .records
            .windows(2)
            .all(|pair| pair[0].aggregate_score >= pair[1].aggregate_score));
    }

    #[tokio::test]
    async fn duplicate_links_are_fetched_once() {
        let document = format!("{}{}", links(&["a"]), links(&["a"]));
        let client = FakeClient::new(&document).with_repo("a", 1);
        let runner = Runner::with_client(config(OutputFormat::Markdown, 5), client);

        let report = runner.run_at(now()).await.unwrap();

        assert_eq!(runner.client().calls(), vec!["octo/a"]);
        assert_eq!(report.summary.repositories_found, 1);
    }

    #[tokio::test]
    async fn fails_when_no_document_loads() {
        let runner = Runner::with_client(config(OutputFormat::Markdown, 5), FakeClient::default());

        let result = runner.run_at(now()).await;

        assert!(matches!(result, Err(RunnerError::NoDocuments { failed: 1 })));
        assert!(runner.client().calls().is_empty());
    }

    #[tokio::test]
    async fn empty_result_renders_header_only() {
        let runner = Runner::with_client(
            config(OutputFormat::Markdown, 5),
            FakeClient::new("no links here"),
        );

        let report = runner.run_at(now()).await.unwrap();
        let artifact = runner.render(&report).unwrap();

        let OutputArtifact::Markdown(table) = artifact else {
            panic!("expected markdown");
        };
        assert_eq!(table.lines().count(), 2);
        assert_eq!(table.lines().next(), Some(MARKDOWN_HEADER));
    }

    #[tokio::test]
    async fn html_is_written_to_configured_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("radar.html");
        let client = FakeClient::new(&links(&["a"])).with_repo("a", 1);
        let runner = Runner::with_client(
            config(OutputFormat::Html, 5).with_html_output(path.clone()),
            client,
        );

        let report = runner.run_at(now()).await.unwrap();
        let artifact = runner.render(&report).unwrap();

        assert_eq!(artifact, OutputArtifact::Html(path.clone()));
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("https://github.com/octo/a"));
    }

    #[tokio::test]
    async fn unwritable_html_path_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing-dir").join("radar.html");
        let runner = Runner::with_client(
            config(OutputFormat::Html, 5).with_html_output(path),
            FakeClient::new(""),
        );

        let report = runner.run_at(now()).await.unwrap();

        assert!(matches!(
            runner.render(&report),
            Err(RunnerError::Output { .. })
        ));
    }
}
