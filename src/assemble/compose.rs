//! Document composition primitives
//!
//! This module renders the pieces of the assembled document: the title
//! section, the table of contents, per-section separators, and content
//! blocks. Ordering decisions live in the assembler; this module only
//! formats what it is handed, in the order it is handed.

use crate::url::display_url;
use chrono::Local;

/// Builds the assembled document incrementally
pub struct DocumentBuilder {
    buffer: String,
}

impl DocumentBuilder {
    /// Creates an empty document
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Writes the title section: document title, generation date, page
    /// count, and the seed URL the crawl started from
    pub fn title_section(&mut self, title: &str, seed_url: &str, page_count: usize) {
        self.buffer.push_str(&format!("# {}\n\n", title));
        self.buffer.push_str(&format!(
            "Generated on {}\n\n",
            Local::now().format("%Y-%m-%d")
        ));
        self.buffer
            .push_str(&format!("Total pages crawled: {}\n\n", page_count));
        self.buffer.push_str(&format!("Source: {}\n\n", seed_url));
        self.buffer.push_str("---\n\n");
    }

    /// Writes the table of contents from `(url, depth)` entries
    ///
    /// Each entry is indented two spaces per depth level and shows the
    /// display-truncated URL.
    pub fn toc_section(&mut self, entries: &[(&str, u32)]) {
        self.buffer.push_str("## Table of Contents\n\n");

        for (url, depth) in entries {
            let indent = "  ".repeat(*depth as usize);
            self.buffer
                .push_str(&format!("{}- {}\n", indent, display_url(url)));
        }

        self.buffer.push_str("\n---\n\n");
    }

    /// Writes a section separator carrying the page URL and its depth
    ///
    /// The heading level deepens with depth, clamped to the Markdown
    /// maximum of six.
    pub fn section_separator(&mut self, url: &str, depth: u32) {
        let level = (depth as usize + 2).min(6);
        let heading = "#".repeat(level);
        self.buffer
            .push_str(&format!("{} {}\n\n", heading, display_url(url)));
        self.buffer.push_str(&format!("*Depth: {}*\n\n", depth));
    }

    /// Appends one section's captured content, closed by a horizontal rule
    pub fn append_content(&mut self, content: &str) {
        self.buffer.push_str(content.trim_end());
        self.buffer.push_str("\n\n---\n\n");
    }

    /// Returns the finished document
    pub fn finish(self) -> String {
        self.buffer
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_section_structure() {
        let mut builder = DocumentBuilder::new();
        builder.title_section("example docs", "https://docs.example.com/", 12);
        let document = builder.finish();

        assert!(document.starts_with("# example docs\n"));
        assert!(document.contains("Generated on "));
        assert!(document.contains("Total pages crawled: 12"));
        assert!(document.contains("Source: https://docs.example.com/"));
    }

    #[test]
    fn test_toc_indents_by_depth() {
        let mut builder = DocumentBuilder::new();
        builder.toc_section(&[
            ("https://docs.example.com/", 0),
            ("https://docs.example.com/guide", 1),
            ("https://docs.example.com/guide/install", 2),
        ]);
        let document = builder.finish();

        assert!(document.contains("## Table of Contents"));
        assert!(document.contains("\n- https://docs.example.com/\n"));
        assert!(document.contains("\n  - https://docs.example.com/guide\n"));
        assert!(document.contains("\n    - https://docs.example.com/guide/install\n"));
    }

    #[test]
    fn test_toc_truncates_long_urls() {
        let long_url = format!("https://docs.example.com/{}", "x".repeat(100));
        let mut builder = DocumentBuilder::new();
        builder.toc_section(&[(long_url.as_str(), 0)]);
        let document = builder.finish();

        assert!(document.contains("..."));
        assert!(!document.contains(&long_url));
    }

    #[test]
    fn test_separator_heading_deepens_with_depth() {
        let mut builder = DocumentBuilder::new();
        builder.section_separator("https://docs.example.com/", 0);
        builder.section_separator("https://docs.example.com/guide", 1);
        let document = builder.finish();

        assert!(document.contains("## https://docs.example.com/\n"));
        assert!(document.contains("### https://docs.example.com/guide\n"));
        assert!(document.contains("*Depth: 0*"));
        assert!(document.contains("*Depth: 1*"));
    }

    #[test]
    fn test_separator_heading_clamps_at_h6() {
        let mut builder = DocumentBuilder::new();
        builder.section_separator("https://docs.example.com/deep", 9);
        let document = builder.finish();

        assert!(document.contains("###### https://docs.example.com/deep\n"));
        assert!(!document.contains("#######"));
    }

    #[test]
    fn test_content_closed_by_rule() {
        let mut builder = DocumentBuilder::new();
        builder.append_content("# Guide\n\nSome text.\n\n\n");
        let document = builder.finish();

        assert_eq!(document, "# Guide\n\nSome text.\n\n---\n\n");
    }
}
