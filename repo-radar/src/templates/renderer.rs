//! Template renderer.

use super::format::{format_count, format_date, format_score};
use super::MARKDOWN_TOPIC_LIMIT;
use crate::record::RepositoryRecord;
use crate::score::{
    AGE_POINTS_PER_YEAR, FORK_WEIGHT, MAX_AGE_YEARS, MAX_FRESHNESS_POINTS, MAX_SCORED_TOPICS,
    STAR_WEIGHT, TOPIC_POINTS, WATCHER_WEIGHT,
};
use chrono::{DateTime, Utc};
use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde::Serialize;
use serde_json::{json, Value};

/// First line of every Markdown table.
pub const MARKDOWN_HEADER: &str =
    "| Repository | Stars | Forks | Watchers | Created | Last Updated | Topics | Aggregate Score |";

const MARKDOWN_TEMPLATE: &str = "\
| Repository | Stars | Forks | Watchers | Created | Last Updated | Topics | Aggregate Score |
|------------|-------|-------|----------|---------|--------------|--------|-----------------|
{{#each rows}}| [{{name}}]({{url}}) | {{stars}} | {{forks}} | {{watchers}} | {{created}} | {{updated}} | {{top_topics}} | {{score}} |
{{/each}}";

const HTML_TEMPLATE: &str = include_str!("report.html.hbs");

handlebars_helper!(thousands: |n: u64| format_count(n));

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Registry for HTML output: default escaping, strict mode, number helpers.
fn create_html_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs.register_helper("thousands", Box::new(thousands));
    hbs
}

/// A record flattened into display-ready values.
#[derive(Debug, Serialize)]
struct RowView<'a> {
    name: &'a str,
    url: &'a str,
    description: &'a str,
    stars: u64,
    forks: u64,
    watchers: u64,
    created: String,
    updated: String,
    topics: &'a [String],
    top_topics: String,
    score: String,
}

impl<'a> RowView<'a> {
    fn new(record: &'a RepositoryRecord) -> Self {
        let shown = record.topics.len().min(MARKDOWN_TOPIC_LIMIT);
        Self {
            name: &record.name,
            url: &record.url,
            description: &record.description,
            stars: record.star_count,
            forks: record.fork_count,
            watchers: record.watcher_count,
            created: format_date(record.created_at),
            updated: format_date(record.updated_at),
            topics: &record.topics,
            top_topics: record.topics[..shown].join(", "),
            score: format_score(record.aggregate_score),
        }
    }
}

/// Renders ranked records as Markdown or HTML.
pub struct TemplateRenderer {
    markdown: Handlebars<'static>,
    html: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            markdown: create_handlebars_registry(),
            html: create_html_registry(),
        }
    }

    /// Renders records as an 8-column Markdown table, one row per record.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_markdown(
        &self,
        records: &[RepositoryRecord],
    ) -> Result<String, super::TemplateError> {
        let data = json!({ "rows": rows(records) });
        Self::render(&self.markdown, MARKDOWN_TEMPLATE, &data, "Markdown")
    }

    /// Renders records as a complete HTML document.
    ///
    /// # Arguments
    ///
    /// * `records` - Ranked records
    /// * `title` - Page heading
    /// * `subtitle` - Line under the heading
    /// * `generated_at` - Shown in the footer
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_html(
        &self,
        records: &[RepositoryRecord],
        title: &str,
        subtitle: &str,
        generated_at: DateTime<Utc>,
    ) -> Result<String, super::TemplateError> {
        let data = json!({
            "title": title,
            "subtitle": subtitle,
            "generated": format_date(generated_at),
            "count": records.len(),
            "rows": rows(records),
            "weights": {
                "stars": STAR_WEIGHT,
                "forks": FORK_WEIGHT,
                "watchers": WATCHER_WEIGHT,
                "age_points": AGE_POINTS_PER_YEAR,
                "age_years": MAX_AGE_YEARS,
                "freshness": MAX_FRESHNESS_POINTS,
                "topic_points": TOPIC_POINTS,
                "topic_limit": MAX_SCORED_TOPICS
            }
        });
        Self::render(&self.html, HTML_TEMPLATE, &data, "HTML")
    }

    fn render(
        registry: &Handlebars<'static>,
        template: &str,
        data: &Value,
        format: &'static str,
    ) -> Result<String, super::TemplateError> {
        registry
            .render_template(template, data)
            .map_err(|source| super::TemplateError::Render { format, source })
    }
}

fn rows(records: &[RepositoryRecord]) -> Vec<RowView<'_>> {
    records.iter().map(RowView::new).collect()
}
