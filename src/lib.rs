//! Page-Glean: single-page structured scraper
//!
//! This crate fetches one web page, parses its markup and extracts a bounded
//! summary (title, headings, paragraphs, links, images, meta description).

pub mod config;
pub mod glean;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Page-Glean operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Request to {url} timed out after {attempts} attempts")]
    Timeout { url: String, attempts: u32 },

    #[error("Failed to connect to {url} after {attempts} attempts: {source}")]
    Connectivity {
        url: String,
        attempts: u32,
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}: {reason}")]
    HttpStatus {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("URL {url} does not point to an HTML page (content type: '{content_type}')")]
    UnsupportedContent { url: String, content_type: String },

    #[error("Unexpected error for {url}: {source}")]
    Unexpected { url: String, source: reqwest::Error },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ScrapeError {
    /// Returns true for failures that are worth retrying
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Connectivity { .. })
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Page-Glean operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, FetcherConfig, ScrapeOptions};
pub use glean::{scrape, HeadingLevel, Headings, ImageEntry, LinkEntry, ScrapeResult, Scraper};
pub use crate::url::is_valid_url;
