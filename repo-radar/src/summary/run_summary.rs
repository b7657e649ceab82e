//! Run summary types.

use super::result::FetchOutcome;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of source documents loaded.
    pub sources_loaded: usize,

    /// Number of source documents that failed to load.
    pub sources_failed: usize,

    /// Number of unique repository references found.
    pub repositories_found: usize,

    /// Number of metadata requests made.
    pub fetch_attempts: usize,

    /// Number of repositories fetched and scored.
    pub repositories_fetched: usize,

    /// Number of metadata requests that failed.
    pub fetch_failures: usize,

    /// Number of references left unvisited by the fetch budget.
    pub repositories_skipped: usize,

    /// The fetch budget for the run.
    pub max_calls: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(max_calls: usize) -> Self {
        Self {
            max_calls,
            ..Default::default()
        }
    }

    /// Updates the summary with a fetch outcome.
    pub fn record_outcome(&mut self, outcome: &FetchOutcome) {
        if outcome.consumed_budget() {
            self.fetch_attempts += 1;
        }
        match outcome {
            FetchOutcome::Fetched { .. } => self.repositories_fetched += 1,
            FetchOutcome::Failed { .. } => self.fetch_failures += 1,
            FetchOutcome::Skipped { .. } => self.repositories_skipped += 1,
        }
    }

    /// Returns true if any source or fetch failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.sources_failed > 0 || self.fetch_failures > 0
    }

    /// Returns true if the budget stopped the run before every reference was tried.
    #[must_use]
    pub fn budget_exhausted(&self) -> bool {
        self.repositories_skipped > 0
    }
}
