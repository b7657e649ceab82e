//! Per-run counters and fetch outcomes.

mod result;
mod run_summary;

pub use result::FetchOutcome;
pub use run_summary::RunSummary;
