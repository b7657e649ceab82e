//! Fetched-and-scored repository records.

use crate::extract::RepositoryRef;
use crate::metadata::RepositoryPayload;
use crate::score::aggregate_score;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One repository's metadata together with its aggregate score.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryRecord {
    /// Canonical `https://github.com/<owner>/<name>` URL, unique within a run.
    pub url: String,

    /// Repository name.
    pub name: String,

    /// Description, empty if the repository has none.
    pub description: String,

    /// Number of stars.
    pub star_count: u64,

    /// Number of forks.
    pub fork_count: u64,

    /// Number of watchers.
    pub watcher_count: u64,

    /// Creation time.
    pub created_at: DateTime<Utc>,

    /// Last update time.
    pub updated_at: DateTime<Utc>,

    /// Last push time, if the repository was ever pushed to.
    pub pushed_at: Option<DateTime<Utc>>,

    /// Topics in API order.
    pub topics: Vec<String>,

    /// Ranking score computed from the fields above.
    pub aggregate_score: f64,
}

impl RepositoryRecord {
    /// Builds a record from an API payload and scores it against `now`.
    #[must_use]
    pub fn from_payload(
        reference: &RepositoryRef,
        payload: RepositoryPayload,
        now: DateTime<Utc>,
    ) -> Self {
        let mut record = Self {
            url: reference.url(),
            name: payload.name,
            description: payload.description.unwrap_or_default(),
            star_count: payload.stargazers_count,
            fork_count: payload.forks_count,
            watcher_count: payload.watchers_count,
            created_at: payload.created_at,
            updated_at: payload.updated_at,
            pushed_at: payload.pushed_at,
            topics: payload.topics.unwrap_or_default(),
            aggregate_score: 0.0,
        };
        record.aggregate_score = aggregate_score(&record, now);
        record
    }
}
