//! Repository metadata retrieval.
//!
//! [`MetadataSource`] is the seam between the pipeline and the GitHub API;
//! [`GitHubClient`] is the production implementation.

mod client;
mod error;
mod payload;

pub use client::GitHubClient;
pub use error::FetchError;
pub use payload::RepositoryPayload;

use crate::extract::RepositoryRef;
use crate::record::RepositoryRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info_span, Instrument};

/// Retrieves repository metadata.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Performs exactly one request for `reference`. No retries.
    async fn fetch_repository(
        &self,
        reference: &RepositoryRef,
    ) -> Result<RepositoryPayload, FetchError>;
}

/// Fetches a repository's metadata and turns it into a scored record.
///
/// # Errors
///
/// Returns [`FetchError`] if the request fails; no record is created.
pub async fn fetch_record<M>(
    source: &M,
    reference: &RepositoryRef,
    now: DateTime<Utc>,
) -> Result<RepositoryRecord, FetchError>
where
    M: MetadataSource + ?Sized,
{
    let span = info_span!("fetch_repository", repo = %reference.full_name());

    async {
        debug!("Requesting repository metadata");
        let payload = source.fetch_repository(reference).await?;
        Ok(RepositoryRecord::from_payload(reference, payload, now))
    }
    .instrument(span)
    .await
}
