//! Report rendering error types.

/// Report rendering error.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Handlebars failed to render a report.
    #[error("Failed to render {format} report: {source}")]
    Render {
        format: &'static str,
        #[source]
        source: handlebars::RenderError,
    },
}
