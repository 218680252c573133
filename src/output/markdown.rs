//! Markdown rendering of scrape results

use crate::glean::ScrapeResult;

/// Formats a result as markdown
pub fn format_markdown(result: &ScrapeResult) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", result.title));
    md.push_str(&format!("- **Source**: <{}>\n", result.url));
    if let Some(description) = &result.meta_description {
        md.push_str(&format!("- **Description**: {}\n", description));
    }
    md.push('\n');

    md.push_str("## Headings\n\n");
    for (level, headings) in result.headings.iter() {
        md.push_str(&format!("### {}\n\n", level.tag().to_uppercase()));
        if headings.is_empty() {
            md.push_str("_None_\n\n");
            continue;
        }
        for heading in headings {
            md.push_str(&format!("- {}\n", heading));
        }
        md.push('\n');
    }

    if !result.paragraphs.is_empty() {
        md.push_str("## Paragraphs\n\n");
        for paragraph in &result.paragraphs {
            md.push_str(&format!("{}\n\n", paragraph));
        }
    }

    if !result.links.is_empty() {
        md.push_str("## Links\n\n");
        md.push_str("| Text | URL |\n");
        md.push_str("|------|-----|\n");
        for link in &result.links {
            md.push_str(&format!("| {} | {} |\n", escape_cell(&link.text), link.url));
        }
        md.push('\n');
    }

    if !result.images.is_empty() {
        md.push_str("## Images\n\n");
        md.push_str("| Alt | URL |\n");
        md.push_str("|-----|-----|\n");
        for image in &result.images {
            md.push_str(&format!("| {} | {} |\n", escape_cell(&image.alt), image.url));
        }
        md.push('\n');
    }

    md
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
