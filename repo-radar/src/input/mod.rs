//! Source document loading.
//!
//! A run reads its repository links from one of three inputs: a single remote
//! document, a file listing remote documents one URL per line, or a local
//! Markdown file.

mod error;

pub use error::SourceError;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, warn, Instrument};
use url::Url;

/// Where a run reads its source documents from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// One remote document.
    Url(Url),
    /// A local file of remote document URLs, one per line.
    UrlList(PathBuf),
    /// A local Markdown file scanned directly.
    Markdown(PathBuf),
}

impl SourceSpec {
    /// Parses a single source URL.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidUrl`] unless `raw` is an absolute
    /// `http` or `https` URL.
    pub fn from_url(raw: &str) -> Result<Self, SourceError> {
        parse_source_url(raw).map(Self::Url)
    }
}

/// Downloads a remote source document.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetches the body of `url` as text.
    async fn fetch_document(&self, url: &Url) -> Result<String, SourceError>;
}

/// A loaded source document.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Where the document came from (URL or file path).
    pub origin: String,
    /// Document text.
    pub content: String,
}

/// Outcome of loading every document named by a [`SourceSpec`].
#[derive(Debug, Default)]
pub struct LoadedSources {
    /// Documents that loaded successfully, in source order.
    pub documents: Vec<SourceDocument>,
    /// Sources that failed, with the reason.
    pub failures: Vec<SourceError>,
}

/// Reads a newline-delimited list of source URLs.
///
/// Lines are trimmed and blank lines skipped. Lines that are not absolute
/// `http(s)` URLs are logged and skipped.
///
/// # Errors
///
/// Returns [`SourceError::Io`] if the file can't be read.
pub fn read_source_list(path: &Path) -> Result<Vec<Url>, SourceError> {
    info!(path = %path.display(), "Reading source list");
    let content = read_file(path)?;

    let mut urls = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_source_url(line) {
            Ok(url) => urls.push(url),
            Err(e) => warn!(line = index + 1, error = %e, "Skipping source list entry"),
        }
    }

    info!(count = urls.len(), "Found source URLs");
    Ok(urls)
}

/// Loads every document named by `spec`.
///
/// Remote documents are fetched one at a time. A document that fails to load
/// is recorded in [`LoadedSources::failures`] and the rest are still loaded.
///
/// # Errors
///
/// Returns [`SourceError`] only when the source file itself can't be read (a missing
/// list or Markdown file).
pub async fn load_sources<D>(documents: &D, spec: &SourceSpec) -> Result<LoadedSources, SourceError>
where
    D: DocumentSource + ?Sized,
{
    let mut loaded = LoadedSources::default();

    let urls = match spec {
        SourceSpec::Markdown(path) => {
            info!(path = %path.display(), "Reading Markdown document");
            loaded.documents.push(SourceDocument {
                origin: path.display().to_string(),
                content: read_file(path)?,
            });
            return Ok(loaded);
        }
        SourceSpec::Url(url) => vec![url.clone()],
        SourceSpec::UrlList(path) => read_source_list(path)?,
    };

    for url in urls {
        let span = info_span!("load_document", url = %url);
        match documents.fetch_document(&url).instrument(span).await {
            Ok(content) => {
                debug!(url = %url, bytes = content.len(), "Fetched document");
                loaded.documents.push(SourceDocument {
                    origin: url.to_string(),
                    content,
                });
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to fetch document");
                loaded.failures.push(e);
            }
        }
    }

    Ok(loaded)
}

fn read_file(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|e| SourceError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

fn parse_source_url(raw: &str) -> Result<Url, SourceError> {
    let invalid = |message: String| SourceError::InvalidUrl {
        url: raw.to_string(),
        message,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(invalid(format!("unsupported scheme '{scheme}'"))),
    }
}
