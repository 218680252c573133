//! Field extractors
//!
//! Each extractor is a read-only function over a [`ParsedDocument`] that
//! returns already-trimmed, already-limited results.

use crate::config::ScrapeOptions;
use crate::glean::document::{element_text, ParsedDocument};
use crate::glean::result::{
    HeadingLevel, Headings, ImageEntry, LinkEntry, ScrapeResult, NO_ALT_TEXT, NO_LINK_TEXT,
    NO_TITLE,
};
use crate::url::resolve_reference;
use url::Url;

/// Extracts the first `<title>`, or "No title found" if absent or blank
pub fn extract_title(doc: &ParsedDocument) -> String {
    doc.select_first("title")
        .map(|title| element_text(&title))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_string())
}

/// Extracts text of the first `limit` headings at `level`
///
/// Blank headings within the window are dropped, so fewer than `limit`
/// entries may be returned even when more elements exist.
pub fn extract_headings(doc: &ParsedDocument, level: HeadingLevel, limit: usize) -> Vec<String> {
    non_empty_texts(doc, level.tag(), limit)
}

/// Extracts text of the first `limit` paragraphs, dropping blank ones
pub fn extract_paragraphs(doc: &ParsedDocument, limit: usize) -> Vec<String> {
    non_empty_texts(doc, "p", limit)
}

/// Extracts the first `limit` anchors carrying an `href`
///
/// Hrefs are resolved against `base_url`. Anchors with no text keep their
/// entry with "No text" as display text.
pub fn extract_links(doc: &ParsedDocument, base_url: &Url, limit: usize) -> Vec<LinkEntry> {
    doc.select_all("a[href]")
        .into_iter()
        .take(limit)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            let Some(url) = resolve_reference(base_url, href) else {
                tracing::debug!("Skipping unresolvable link href '{}'", href);
                return None;
            };
            Some(LinkEntry {
                text: or_default(element_text(&anchor), NO_LINK_TEXT),
                url,
            })
        })
        .collect()
}

/// Extracts the first `limit` images carrying a `src`
///
/// Sources are resolved against `base_url`; a missing or blank alt becomes
/// "No alt text".
pub fn extract_images(doc: &ParsedDocument, base_url: &Url, limit: usize) -> Vec<ImageEntry> {
    doc.select_all("img[src]")
        .into_iter()
        .take(limit)
        .filter_map(|img| {
            let src = img.value().attr("src")?;
            let Some(url) = resolve_reference(base_url, src) else {
                tracing::debug!("Skipping unresolvable image src '{}'", src);
                return None;
            };
            let alt = img.value().attr("alt").unwrap_or_default().trim().to_string();
            Some(ImageEntry {
                alt: or_default(alt, NO_ALT_TEXT),
                url,
            })
        })
        .collect()
}

/// Extracts the trimmed `content` of `<meta name="description">`
///
/// Returns `None` only when there is no such tag; a tag without `content`
/// yields an empty string.
pub fn extract_meta_description(doc: &ParsedDocument) -> Option<String> {
    doc.select_first(r#"meta[name="description"]"#).map(|meta| {
        meta.value()
            .attr("content")
            .unwrap_or_default()
            .trim()
            .to_string()
    })
}

/// Runs every extractor and assembles the result record
///
/// `source_url` is recorded verbatim; `base_url` is its parsed form and is
/// used to resolve link and image references.
pub fn extract_all(
    doc: &ParsedDocument,
    source_url: &str,
    base_url: &Url,
    options: &ScrapeOptions,
) -> ScrapeResult {
    ScrapeResult {
        url: source_url.to_string(),
        title: extract_title(doc),
        headings: Headings {
            h1: extract_headings(doc, HeadingLevel::H1, options.headings_limit),
            h2: extract_headings(doc, HeadingLevel::H2, options.headings_limit),
            h3: extract_headings(doc, HeadingLevel::H3, options.headings_limit),
        },
        paragraphs: extract_paragraphs(doc, options.paragraphs_limit),
        links: extract_links(doc, base_url, options.links_limit),
        images: extract_images(doc, base_url, options.images_limit),
        meta_description: extract_meta_description(doc),
    }
}

fn non_empty_texts(doc: &ParsedDocument, css: &str, limit: usize) -> Vec<String> {
    doc.select_all(css)
        .iter()
        .take(limit)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

fn or_default(text: String, fallback: &str) -> String {
    if text.is_empty() {
        fallback.to_string()
    } else {
        text
    }
}
