//! The page renderer seam
//!
//! The crawl engine delegates every page visit to a renderer: reach the
//! page, extract its outbound links, and capture its main content as the
//! page artifact. The engine depends only on this contract, so renderers of
//! different fidelity (plain HTTP today, a headless browser later) plug in
//! without touching the traversal logic.

use std::time::Duration;
use thiserror::Error;
use url::Url;

pub use async_trait::async_trait;

/// Default time allowed to reach a page and receive its document.
pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Default time allowed for the content selector to appear.
pub const DEFAULT_SELECTOR_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-visit rendering options
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Comma-separated CSS selector clauses tried in order to locate the
    /// content root; the first clause doubles as the wait condition
    pub selector: String,

    /// Maximum time to reach the page and receive its document
    pub navigation_timeout: Duration,

    /// Maximum time to wait for the content selector
    pub selector_timeout: Duration,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            selector: crate::config::DEFAULT_CONTENT_SELECTOR.to_string(),
            navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
            selector_timeout: DEFAULT_SELECTOR_TIMEOUT,
        }
    }
}

/// The outcome of a successful page visit
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Absolute outbound link URLs in first-occurrence order, fragments
    /// stripped, duplicates removed
    pub links: Vec<String>,

    /// The captured main content as UTF-8 Markdown
    pub content: Vec<u8>,
}

/// Errors a renderer can produce, one per step of the visit protocol
#[derive(Debug, Error)]
pub enum RenderError {
    /// The page could not be reached, or answered with a non-success status
    #[error("Navigation failed for {url}: {message}")]
    Navigation { url: String, message: String },

    /// No content selector clause matched within the allotted time
    #[error("Selector {selector:?} not found on {url} within {timeout:?}")]
    SelectorTimeout {
        url: String,
        selector: String,
        timeout: Duration,
    },

    /// The page was reached but its content could not be captured
    #[error("Capture failed for {url}: {message}")]
    Capture { url: String, message: String },
}

/// Contract between the crawl engine and a page renderer
///
/// A single renderer instance serves the whole crawl; each call is one
/// isolated page visit whose resources are released on every exit path.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Visits a page and returns its outbound links and captured content
    ///
    /// # Arguments
    ///
    /// * `url` - The page to visit
    /// * `options` - Selector and timeout settings for this visit
    async fn fetch_and_capture(
        &self,
        url: &Url,
        options: &RenderOptions,
    ) -> Result<RenderedPage, RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.navigation_timeout, Duration::from_secs(60));
        assert_eq!(options.selector_timeout, Duration::from_secs(10));
        assert!(options.selector.starts_with("main"));
    }

    #[test]
    fn test_error_display_names_the_url() {
        let err = RenderError::Navigation {
            url: "https://example.com/missing".to_string(),
            message: "HTTP 404".to_string(),
        };
        let shown = err.to_string();
        assert!(shown.contains("https://example.com/missing"));
        assert!(shown.contains("HTTP 404"));
    }
}
