//! Console rendering of scrape results

use crate::glean::ScrapeResult;
use crate::output::preview;

/// Formats a result in the interactive console layout
///
/// Empty sections are omitted; paragraphs are previewed at 100 characters
/// and link text at 50.
pub fn format_result(result: &ScrapeResult) -> String {
    let rule = "=".repeat(60);
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", rule));
    out.push_str(&format!("SCRAPED DATA FOR: {}\n", result.url));
    out.push_str(&format!("{}\n", rule));

    out.push_str(&format!("\n Title: {}\n", result.title));

    if let Some(description) = result.meta_description.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!("\n Meta Description: {}\n", description));
    }

    for (level, headings) in result.headings.iter() {
        if headings.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "\n {} Headings ({}):\n",
            level.tag().to_uppercase(),
            headings.len()
        ));
        for (i, heading) in headings.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, heading));
        }
    }

    if !result.paragraphs.is_empty() {
        out.push_str(&format!("\n Paragraphs ({}):\n", result.paragraphs.len()));
        for (i, paragraph) in result.paragraphs.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, preview(paragraph, 100)));
        }
    }

    if !result.links.is_empty() {
        out.push_str(&format!("\n Links ({}):\n", result.links.len()));
        for (i, link) in result.links.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} -> {}\n",
                i + 1,
                preview(&link.text, 50),
                link.url
            ));
        }
    }

    if !result.images.is_empty() {
        out.push_str(&format!("\n Images ({}):\n", result.images.len()));
        for (i, image) in result.images.iter().enumerate() {
            out.push_str(&format!("  {}. {} -> {}\n", i + 1, image.alt, image.url));
        }
    }

    out
}
