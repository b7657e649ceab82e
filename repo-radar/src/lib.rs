#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod extract;
pub mod input;
pub mod metadata;
pub mod record;
pub mod runner;
pub mod score;
pub mod summary;
pub mod templates;

pub use config::{load_report_config, ConfigError, GitHubSettings, ReportConfig, ReportSettings};
pub use extract::{extract_repository_urls, RepositoryRef, RepositorySet};
pub use input::{load_sources, read_source_list, DocumentSource, SourceError, SourceSpec};
pub use metadata::{fetch_record, FetchError, GitHubClient, MetadataSource, RepositoryPayload};
pub use record::RepositoryRecord;
pub use runner::{
    OutputArtifact, OutputFormat, RadarReport, Runner, RunnerConfig, RunnerError,
    DEFAULT_MAX_CALLS, TOKEN_ENV_VAR,
};
pub use score::{aggregate_score, rank_records, ScoreBreakdown};
pub use summary::{FetchOutcome, RunSummary};
pub use templates::{TemplateError, TemplateRenderer};
