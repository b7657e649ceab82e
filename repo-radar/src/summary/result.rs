//! Per-repository fetch outcomes.

/// Result of one fetch attempt, or of a reference the budget never reached.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Metadata was fetched and scored.
    Fetched {
        /// Repository URL.
        repository: String,
        /// Aggregate score of the new record.
        score: f64,
    },

    /// The attempt failed; the repository is left out of the report.
    Failed {
        /// Repository URL.
        repository: String,
        /// Error message.
        error: String,
    },

    /// Not attempted because the fetch budget ran out.
    Skipped {
        /// Repository URL.
        repository: String,
    },
}

impl FetchOutcome {
    /// Returns true if this outcome used one unit of the fetch budget.
    #[must_use]
    pub fn consumed_budget(&self) -> bool {
        !matches!(self, Self::Skipped { .. })
    }
}
