//! Aggregate scoring.
//!
//! The score mixes three unbounded popularity terms (stars, forks, watchers)
//! with three bounded terms (age, update recency, topics):
//!
//! ```text
//! score = stars * 0.25 + forks * 0.20 + watchers * 0.15
//!       + min(age_days / 365, 5) * 2           (0..=10)
//!       + max(0, 15 - stale_days / 30)         (0..=15)
//!       + min(topic_count, 5) * 3              (0..=15)
//! ```

use crate::record::RepositoryRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Points per star.
pub const STAR_WEIGHT: f64 = 0.25;
/// Points per fork.
pub const FORK_WEIGHT: f64 = 0.20;
/// Points per watcher.
pub const WATCHER_WEIGHT: f64 = 0.15;

/// Age stops earning points after this many years.
pub const MAX_AGE_YEARS: f64 = 5.0;
/// Points per year of age.
pub const AGE_POINTS_PER_YEAR: f64 = 2.0;

/// Points for a repository updated just now; one point is lost per 30 days.
pub const MAX_FRESHNESS_POINTS: f64 = 15.0;
const DAYS_PER_FRESHNESS_POINT: f64 = 30.0;

/// Only this many topics earn points.
pub const MAX_SCORED_TOPICS: usize = 5;
/// Points per topic.
pub const TOPIC_POINTS: f64 = 3.0;

const DAYS_PER_YEAR: f64 = 365.0;
const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// The individual terms of an aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub stars: f64,
    pub forks: f64,
    pub watchers: f64,
    pub age: f64,
    pub freshness: f64,
    pub topics: f64,
}

impl ScoreBreakdown {
    /// Computes every term for `record` as of `now`.
    ///
    /// Timestamps later than `now` count as "now", so skewed clocks can't push
    /// the age term below zero or the freshness term above its maximum.
    #[must_use]
    pub fn compute(record: &RepositoryRecord, now: DateTime<Utc>) -> Self {
        let age_days = days_between(record.created_at, now);
        let stale_days = days_between(record.updated_at, now);
        let topic_count = record.topics.len().min(MAX_SCORED_TOPICS);

        Self {
            stars: record.star_count as f64 * STAR_WEIGHT,
            forks: record.fork_count as f64 * FORK_WEIGHT,
            watchers: record.watcher_count as f64 * WATCHER_WEIGHT,
            age: (age_days / DAYS_PER_YEAR).min(MAX_AGE_YEARS) * AGE_POINTS_PER_YEAR,
            freshness: (MAX_FRESHNESS_POINTS - stale_days / DAYS_PER_FRESHNESS_POINT).max(0.0),
            topics: topic_count as f64 * TOPIC_POINTS,
        }
    }

    /// Sum of all terms.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.stars + self.forks + self.watchers + self.age + self.freshness + self.topics
    }
}

/// Computes the aggregate score of `record` as of `now`.
///
/// The record's own `aggregate_score` is ignored.
#[must_use]
pub fn aggregate_score(record: &RepositoryRecord, now: DateTime<Utc>) -> f64 {
    ScoreBreakdown::compute(record, now).total()
}

/// Sorts records by score, highest first. Equal scores keep their order.
pub fn rank_records(records: &mut [RepositoryRecord]) {
    records.sort_by(|a, b| b.aggregate_score.total_cmp(&a.aggregate_score));
}

/// Fractional days from `from` to `now`, never negative.
fn days_between(from: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    ((now - from).num_milliseconds() as f64 / MILLIS_PER_DAY).max(0.0)
}
