use serde::Deserialize;
use std::time::Duration;

/// Browser-like identification sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for Page-Glean
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub limits: ScrapeOptions,
}

/// HTTP fetcher configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Per-attempt request timeout (milliseconds)
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Total number of attempts for transient failures
    #[serde(rename = "max-retries")]
    pub max_retries: u32,

    /// Value of the User-Agent header
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl FetcherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            max_retries: 3,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Per-field extraction limits
///
/// `headings_limit` applies to each of h1, h2 and h3 separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    #[serde(rename = "headings-limit")]
    pub headings_limit: usize,

    #[serde(rename = "paragraphs-limit")]
    pub paragraphs_limit: usize,

    #[serde(rename = "links-limit")]
    pub links_limit: usize,

    #[serde(rename = "images-limit")]
    pub images_limit: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            headings_limit: 10,
            paragraphs_limit: 5,
            links_limit: 10,
            images_limit: 5,
        }
    }
}
