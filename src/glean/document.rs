//! Document parser
//!
//! Wraps `scraper::Html` so the extractors have a read-only tree to query.
//! Parsing is permissive: malformed or partial markup still yields a tree.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document owned by a single scrape
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    /// Returns every element matching a CSS selector, in document order
    ///
    /// An unparsable selector matches nothing.
    pub fn select_all(&self, css: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(css) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Returns the first element matching a CSS selector
    pub fn select_first(&self, css: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(css).ok()?;
        self.html.select(&selector).next()
    }

    /// Parser errors recovered from while building the tree
    pub fn recovered_errors(&self) -> usize {
        self.html.errors.len()
    }
}

impl std::fmt::Debug for ParsedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedDocument")
            .field("recovered_errors", &self.recovered_errors())
            .finish()
    }
}

/// Parses markup into a queryable document
///
/// # Example
///
/// ```
/// use page_glean::glean::parse;
///
/// let doc = parse("<html><head><title>Hi</title></head></html>");
/// assert!(doc.select_first("title").is_some());
/// ```
pub fn parse(body: &str) -> ParsedDocument {
    let html = Html::parse_document(body);
    if !html.errors.is_empty() {
        tracing::trace!("Recovered from {} markup errors", html.errors.len());
    }
    ParsedDocument { html }
}

/// Collects an element's descendant text and trims it
pub(crate) fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
