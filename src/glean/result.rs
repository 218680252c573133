//! Scrape result types

use serde::Serialize;

/// Fallback title when the page has no usable `<title>`
pub const NO_TITLE: &str = "No title found";

/// Fallback display text for anchors without text
pub const NO_LINK_TEXT: &str = "No text";

/// Fallback text for images without an alt attribute
pub const NO_ALT_TEXT: &str = "No alt text";

/// Heading levels captured in a scrape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// All captured levels, in order
    pub const ALL: [HeadingLevel; 3] = [Self::H1, Self::H2, Self::H3];

    /// The element tag for this level
    pub fn tag(&self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Heading text grouped by level; always carries all three levels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Headings {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
}

impl Headings {
    pub fn get(&self, level: HeadingLevel) -> &[String] {
        match level {
            HeadingLevel::H1 => &self.h1,
            HeadingLevel::H2 => &self.h2,
            HeadingLevel::H3 => &self.h3,
        }
    }

    /// Iterates over `(level, headings)` pairs in level order
    pub fn iter(&self) -> impl Iterator<Item = (HeadingLevel, &[String])> {
        HeadingLevel::ALL
            .into_iter()
            .map(move |level| (level, self.get(level)))
    }
}

/// An outbound link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    /// Trimmed anchor text, or "No text"
    pub text: String,
    /// Absolute target URL
    pub url: String,
}

/// An image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEntry {
    /// Trimmed alt text, or "No alt text"
    pub alt: String,
    /// Absolute source URL
    pub url: String,
}

/// Structured summary of a single page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeResult {
    /// The URL that was requested
    pub url: String,
    pub title: String,
    pub headings: Headings,
    pub paragraphs: Vec<String>,
    pub links: Vec<LinkEntry>,
    pub images: Vec<ImageEntry>,
    pub meta_description: Option<String>,
}
