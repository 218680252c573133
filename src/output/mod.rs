//! Output module for rendering scrape results
//!
//! Renderers are thin consumers of [`ScrapeResult`]: they only read the
//! finished record and never reach into extraction.

mod console;
mod markdown;

pub use console::format_result;
pub use markdown::format_markdown;

use crate::glean::ScrapeResult;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to format output: {0}")]
    Format(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Supported renderings of a scrape result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console layout
    #[default]
    Text,
    /// Markdown document
    Markdown,
    /// Pretty-printed JSON
    Json,
}

/// Renders a result in the requested format
pub fn render(result: &ScrapeResult, format: OutputFormat) -> OutputResult<String> {
    match format {
        OutputFormat::Text => Ok(format_result(result)),
        OutputFormat::Markdown => Ok(format_markdown(result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

/// Renders a result and writes it to `path`
pub fn write_output(result: &ScrapeResult, format: OutputFormat, path: &Path) -> OutputResult<()> {
    let rendered = render(result, format)?;
    std::fs::write(path, rendered)?;
    Ok(())
}

/// Shortens `text` to at most `max_chars` characters, appending "..." when cut
pub(crate) fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
