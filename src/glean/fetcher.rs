//! HTTP fetcher implementation
//!
//! This module handles the single GET request of a scrape, including:
//! - Building the HTTP client with a browser-like user agent
//! - Retry logic for transient failures (timeouts, connection errors)
//! - Error classification
//! - Content-Type gating

use crate::config::FetcherConfig;
use crate::glean::document::{parse, ParsedDocument};
use crate::ScrapeError;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use std::time::Duration;

/// Fixed wait between attempts after a transient failure
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

/// A successfully fetched HTML page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,
    /// HTTP status code
    pub status_code: u16,
    /// Content-Type header value
    pub content_type: String,
    /// Page body content
    pub body: String,
}

/// Outcome of a single attempt that did not produce a page
enum AttemptFailure {
    Timeout,
    Connect(reqwest::Error),
    Fatal(ScrapeError),
}

/// Builds an HTTP client with proper configuration
///
/// The client follows redirects and keeps no cookies between calls.
///
/// # Example
///
/// ```
/// use page_glean::config::FetcherConfig;
/// use page_glean::glean::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with retry and content-type gating
///
/// The URL must already have been validated by the caller.
///
/// # Retry Logic
///
/// | Condition | Action |
/// |-----------|--------|
/// | Timeout | Retry up to `max_retries` attempts, 1s delay, then `Timeout` |
/// | Connection failure | Retry up to `max_retries` attempts, 1s delay, then `Connectivity` |
/// | HTTP 4xx / 5xx | Immediate `HttpStatus` |
/// | Content-Type without "html" | Immediate `UnsupportedContent` |
/// | Anything else | Immediate `Unexpected` |
pub async fn fetch_page(
    client: &Client,
    url: &str,
    config: &FetcherConfig,
) -> Result<FetchedPage, ScrapeError> {
    let attempts = config.max_retries.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;
        let is_last = attempt == attempts;
        tracing::debug!("Fetching {} (attempt {}/{})", url, attempt, attempts);

        match try_fetch(client, url, config.timeout()).await {
            Ok(page) => return Ok(page),
            Err(AttemptFailure::Fatal(e)) => return Err(e),
            Err(AttemptFailure::Timeout) => {
                if is_last {
                    return Err(ScrapeError::Timeout {
                        url: url.to_string(),
                        attempts,
                    });
                }
                tracing::warn!("Request to {} timed out, retrying in {:?}", url, RETRY_DELAY);
            }
            Err(AttemptFailure::Connect(source)) => {
                if is_last {
                    return Err(ScrapeError::Connectivity {
                        url: url.to_string(),
                        attempts,
                        source,
                    });
                }
                tracing::warn!(
                    "Failed to connect to {} ({}), retrying in {:?}",
                    url,
                    source,
                    RETRY_DELAY
                );
            }
        }

        tokio::time::sleep(RETRY_DELAY).await;
    }
}

/// Fetches a URL and parses the body into a document
pub async fn fetch_document(
    client: &Client,
    url: &str,
    config: &FetcherConfig,
) -> Result<ParsedDocument, ScrapeError> {
    let page = fetch_page(client, url, config).await?;
    tracing::debug!(
        "Fetched {} ({} bytes, status {}, content type {}, final URL {})",
        url,
        page.body.len(),
        page.status_code,
        page.content_type,
        page.final_url
    );
    Ok(parse(&page.body))
}

/// Returns true if a Content-Type value indicates an HTML document
pub fn is_html_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("html")
}

async fn try_fetch(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<FetchedPage, AttemptFailure> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| classify(url, e))?;

    check_status(url, &response)?;

    let status_code = response.status().as_u16();
    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !is_html_content_type(&content_type) {
        return Err(AttemptFailure::Fatal(ScrapeError::UnsupportedContent {
            url: url.to_string(),
            content_type,
        }));
    }

    let body = response.text().await.map_err(|e| classify(url, e))?;

    Ok(FetchedPage {
        final_url,
        status_code,
        content_type,
        body,
    })
}

fn check_status(url: &str, response: &Response) -> Result<(), AttemptFailure> {
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(AttemptFailure::Fatal(ScrapeError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }));
    }
    Ok(())
}

fn classify(url: &str, error: reqwest::Error) -> AttemptFailure {
    if error.is_timeout() {
        AttemptFailure::Timeout
    } else if error.is_connect() {
        AttemptFailure::Connect(error)
    } else {
        AttemptFailure::Fatal(ScrapeError::Unexpected {
            url: url.to_string(),
            source: error,
        })
    }
}
