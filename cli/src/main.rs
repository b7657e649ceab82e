//! CLI for repo-radar.
//!
//! Reads Markdown documents, ranks the GitHub repositories they link to and
//! prints a Markdown table or writes an HTML report.

use clap::{ArgGroup, Parser, ValueEnum};
use repo_radar::{
    load_report_config, ConfigError, FetchOutcome, OutputArtifact, OutputFormat, RadarReport,
    RunSummary, Runner, RunnerConfig, RunnerError, SourceSpec, DEFAULT_MAX_CALLS,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Repo Radar - Rank the GitHub repositories linked from Markdown reading lists.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["url", "url_file", "markdown"])))]
struct Args {
    /// URL of a Markdown document to scan.
    #[arg(long)]
    url: Option<String>,

    /// File listing Markdown document URLs, one per line.
    #[arg(short = 'f', long)]
    url_file: Option<PathBuf>,

    /// Local Markdown file to scan.
    #[arg(long)]
    markdown: Option<PathBuf>,

    /// Output format.
    #[arg(short = 'o', long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// Maximum number of GitHub API calls.
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_CALLS,
          value_parser = clap::value_parser!(u32).range(1..))]
    max_calls: u32,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Path to the report config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the HTML report.
    #[arg(long)]
    html_output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Markdown,
    Html,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Markdown => OutputFormat::Markdown,
            Format::Html => OutputFormat::Html,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // rustls needs a process-wide crypto provider; an error means one is already installed.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::from(0)
        }
        Err(e) if e.is_config() => {
            error!(error = %e, "Invalid configuration");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr, so stdout only
///   carries the report
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let source = source_spec(&args)?;
    let token = args.token.unwrap_or_default();
    let mut config = RunnerConfig::new(source, token, args.format.into(), args.max_calls)?;

    if let Some(path) = &args.config {
        config = config.with_report(load_report_config(path)?);
    }
    if let Some(path) = args.html_output {
        config = config.with_html_output(path);
    }

    let runner = Runner::new(config)?;
    let report = runner.run().await?;
    print_ranking(&report);

    match runner.render(&report)? {
        OutputArtifact::Markdown(table) => print!("{table}"),
        OutputArtifact::Html(path) => {
            eprintln!("HTML report written to {}", path.display());
        }
    }

    Ok(report.summary)
}

fn source_spec(args: &Args) -> Result<SourceSpec, RunnerError> {
    if let Some(url) = &args.url {
        return Ok(SourceSpec::from_url(url)?);
    }
    if let Some(path) = &args.url_file {
        return Ok(SourceSpec::UrlList(path.clone()));
    }
    match &args.markdown {
        Some(path) => Ok(SourceSpec::Markdown(path.clone())),
        None => Err(ConfigError::MissingInput.into()),
    }
}

/// Prints the ranked list to stderr.
fn print_ranking(report: &RadarReport) {
    eprintln!("\nRanking:");
    for (rank, record) in report.records.iter().enumerate() {
        eprintln!(
            "  {:>2}. {:<50} {:>10.2}",
            rank + 1,
            record.url,
            record.aggregate_score
        );
    }

    for outcome in &report.outcomes {
        if let FetchOutcome::Failed { repository, error } = outcome {
            eprintln!("  failed: {repository} ({error})");
        }
    }
}

/// Prints the final run summary to stderr.
fn print_summary(summary: &RunSummary) {
    eprintln!("\nSummary:");
    eprintln!(
        "  Sources loaded: {} ({} failed)",
        summary.sources_loaded, summary.sources_failed
    );
    eprintln!("  Repositories found: {}", summary.repositories_found);
    eprintln!(
        "  API calls: {} of {}",
        summary.fetch_attempts, summary.max_calls
    );
    eprintln!("  Repositories ranked: {}", summary.repositories_fetched);
    eprintln!("  Fetch failures: {}", summary.fetch_failures);

    if summary.budget_exhausted() {
        eprintln!(
            "  Not fetched (budget exhausted): {}",
            summary.repositories_skipped
        );
    }
}
