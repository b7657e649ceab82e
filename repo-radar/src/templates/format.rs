//! Value formatting shared by the renderers.

use chrono::{DateTime, Utc};

/// Formats a timestamp as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// Formats a score with two decimals.
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}

/// Formats a count with `,` thousands separators.
#[must_use]
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
