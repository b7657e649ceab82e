//! Report rendering using Handlebars.
//!
//! Records are rendered either as a Markdown table or as a self-contained
//! HTML page with sortable columns and a light/dark theme toggle.

mod error;
mod format;
mod renderer;

pub use error::TemplateError;
pub use format::{format_count, format_date, format_score};
pub use renderer::{create_handlebars_registry, TemplateRenderer, MARKDOWN_HEADER};

/// Number of topics shown per row in the Markdown table.
pub const MARKDOWN_TOPIC_LIMIT: usize = 3;
