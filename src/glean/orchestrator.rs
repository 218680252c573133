//! Scrape orchestration
//!
//! Sequences validation, fetch, parse and extraction for a single URL.

use crate::config::{
    validate_fetcher_config, validate_scrape_options, FetcherConfig, ScrapeOptions,
};
use crate::glean::extract::extract_all;
use crate::glean::fetcher::{build_http_client, fetch_document};
use crate::glean::result::ScrapeResult;
use crate::url::parse_absolute_url;
use crate::ScrapeError;
use reqwest::Client;

/// Scrapes single pages with a fixed fetcher configuration
///
/// A `Scraper` holds no per-page state, so one instance can serve many
/// independent scrapes, including concurrent ones.
///
/// # Example
///
/// ```no_run
/// use page_glean::{FetcherConfig, Scraper};
///
/// # async fn example() -> page_glean::Result<()> {
/// let scraper = Scraper::new(FetcherConfig::default())?;
/// let result = scraper.scrape("https://example.com", None).await?;
/// println!("{}", result.title);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Scraper {
    client: Client,
    config: FetcherConfig,
}

impl Scraper {
    /// Creates a new scraper, validating the fetcher configuration
    pub fn new(config: FetcherConfig) -> Result<Self, ScrapeError> {
        validate_fetcher_config(&config)?;
        let client = build_http_client(&config).map_err(|source| ScrapeError::Unexpected {
            url: String::new(),
            source,
        })?;
        Ok(Self { client, config })
    }

    /// Fetches `url` and extracts its structured summary
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute page URL; surrounding whitespace is ignored
    /// * `options` - Extraction limits; defaults apply when `None`
    ///
    /// # Returns
    ///
    /// * `Ok(ScrapeResult)` - The extracted summary
    /// * `Err(ScrapeError)` - `InvalidInput` before any network activity,
    ///   otherwise the fetch failure unchanged
    pub async fn scrape(
        &self,
        url: &str,
        options: Option<&ScrapeOptions>,
    ) -> Result<ScrapeResult, ScrapeError> {
        let options = options.copied().unwrap_or_default();
        validate_scrape_options(&options)
            .map_err(|e| ScrapeError::InvalidInput(e.to_string()))?;

        let url = url.trim();
        if url.is_empty() {
            return Err(ScrapeError::InvalidInput("URL cannot be empty".to_string()));
        }
        let base_url = parse_absolute_url(url)
            .ok_or_else(|| ScrapeError::InvalidInput(format!("Invalid URL format: '{}'", url)))?;

        tracing::info!("Scraping {}", url);
        let document = fetch_document(&self.client, url, &self.config).await?;
        let result = extract_all(&document, url, &base_url, &options);

        tracing::info!(
            "Scraped {}: {} headings, {} paragraphs, {} links, {} images",
            url,
            result.headings.iter().map(|(_, h)| h.len()).sum::<usize>(),
            result.paragraphs.len(),
            result.links.len(),
            result.images.len()
        );

        Ok(result)
    }
}

/// Scrapes a single page with the default fetcher configuration
pub async fn scrape(
    url: &str,
    options: Option<&ScrapeOptions>,
) -> Result<ScrapeResult, ScrapeError> {
    Scraper::new(FetcherConfig::default())?
        .scrape(url, options)
        .await
}
