//! Glean module: the fetch-and-extract pipeline
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching with retry logic and content-type gating
//! - HTML parsing into a read-only document
//! - Field extraction with per-field limits
//! - Orchestration of a single scrape

mod document;
mod extract;
mod fetcher;
mod orchestrator;
mod result;

pub use document::{parse, ParsedDocument};
pub use extract::{
    extract_all, extract_headings, extract_images, extract_links, extract_meta_description,
    extract_paragraphs, extract_title,
};
pub use fetcher::{
    build_http_client, fetch_document, fetch_page, is_html_content_type, FetchedPage, RETRY_DELAY,
};
pub use orchestrator::{scrape, Scraper};
pub use result::{
    HeadingLevel, Headings, ImageEntry, LinkEntry, ScrapeResult, NO_ALT_TEXT, NO_LINK_TEXT,
    NO_TITLE,
};
