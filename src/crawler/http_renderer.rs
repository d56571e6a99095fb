//! HTTP-based page renderer
//!
//! This module implements the renderer contract over a plain HTTP client:
//! - GET requests with a per-visit navigation timeout, redirects followed
//! - Link extraction from the full document, before any suppression
//! - Page chrome (navigation, banners, overlays) detached from the parse tree
//! - Content root located by trying the selector clauses in order
//! - HTML converted to Markdown for the captured artifact

use crate::crawler::renderer::{
    async_trait, PageRenderer, RenderError, RenderOptions, RenderedPage,
};
use htmd::HtmlToMarkdown;
use reqwest::Client;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// Page chrome detached before capture. Covers the navigation, banner, and
/// overlay furniture documentation themes wrap around their content.
const CHROME_SELECTORS: &[&str] = &[
    "nav",
    "aside",
    "header",
    "footer",
    ".sidebar",
    ".navigation",
    ".header",
    ".footer",
    ".nav",
    ".navbar",
    ".breadcrumb",
    "[class*=\"cookie\"]",
    "[class*=\"banner\"]",
    "[class*=\"popup\"]",
    "[class*=\"modal\"]",
    "[class*=\"overlay\"]",
    "[class*=\"alert\"]",
];

/// Tags dropped entirely during Markdown conversion.
const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "iframe"];

/// Renderer backed by a shared HTTP client
///
/// One instance serves the whole crawl. Each visit is a single GET whose
/// connection resources are released once the response body is consumed,
/// on the error paths included.
pub struct HttpRenderer {
    client: Client,
}

impl HttpRenderer {
    /// Creates a renderer with its own HTTP client
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client()?,
        })
    }

    async fn navigate(&self, url: &Url, timeout: Duration) -> Result<String, RenderError> {
        let response = self
            .client
            .get(url.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_transport_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RenderError::Navigation {
                url: url.to_string(),
                message: format!("HTTP {}", status.as_u16()),
            });
        }

        // A missing Content-Type is treated as HTML; an explicit non-HTML
        // type cannot be captured.
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type.is_empty() && !content_type.contains("text/html") {
            return Err(RenderError::Capture {
                url: url.to_string(),
                message: format!("unsupported content type: {}", content_type),
            });
        }

        response.text().await.map_err(|e| RenderError::Navigation {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl PageRenderer for HttpRenderer {
    async fn fetch_and_capture(
        &self,
        url: &Url,
        options: &RenderOptions,
    ) -> Result<RenderedPage, RenderError> {
        let html = self.navigate(url, options.navigation_timeout).await?;

        let mut document = Html::parse_document(&html);

        // Links come from the full document: the navigation chrome that is
        // about to be suppressed is exactly where documentation sites keep
        // their section links.
        let links = extract_links(&document, url);

        suppress_chrome(&mut document);

        let root_html = select_content_root(&document, &options.selector).ok_or_else(|| {
            RenderError::SelectorTimeout {
                url: url.to_string(),
                selector: options.selector.clone(),
                timeout: options.selector_timeout,
            }
        })?;

        let content = capture_markdown(&root_html, url)?;

        Ok(RenderedPage { links, content })
    }
}

/// Builds the HTTP client shared by every page visit
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!("docbinder/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

fn classify_transport_error(url: &Url, error: &reqwest::Error) -> RenderError {
    let message = if error.is_timeout() {
        "request timeout".to_string()
    } else if error.is_connect() {
        "connection failed".to_string()
    } else {
        error.to_string()
    };

    RenderError::Navigation {
        url: url.to_string(),
        message,
    }
}

/// Extracts outbound links in first-occurrence order, without duplicates
fn extract_links(document: &Html, page_url: &Url) -> Vec<String> {
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    if let Ok(anchor_selector) = Selector::parse("a[href]") {
        for element in document.select(&anchor_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute) = resolve_link(href, page_url) {
                    if seen.insert(absolute.clone()) {
                        links.push(absolute);
                    }
                }
            }
        }
    }

    links
}

/// Resolves an href to an absolute crawl candidate
///
/// Returns None for fragment-only anchors, mail/phone/script schemes, data
/// URIs, and anything that is not http(s) after resolution. The fragment is
/// stripped so anchor variants collapse onto one page identity.
fn resolve_link(href: &str, page_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match page_url.join(href) {
        Ok(mut absolute) => {
            if absolute.scheme() != "http" && absolute.scheme() != "https" {
                return None;
            }
            absolute.set_fragment(None);
            Some(absolute.to_string())
        }
        Err(_) => None,
    }
}

/// Detaches chrome elements from the parse tree
fn suppress_chrome(document: &mut Html) {
    for selector_text in CHROME_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_text) {
            let ids: Vec<_> = document
                .select(&selector)
                .map(|element| element.id())
                .collect();

            for id in ids {
                if let Some(mut node) = document.tree.get_mut(id) {
                    node.detach();
                }
            }
        }
    }
}

/// Locates the content root by trying each selector clause in order
///
/// Falls back to `body` when no clause matches. Returns the root's outer
/// HTML, or None when even the fallback finds nothing (a pathological
/// document; the HTML parser normally synthesizes a body).
fn select_content_root(document: &Html, selector: &str) -> Option<String> {
    for clause in selector.split(',') {
        let clause = clause.trim();
        if clause.is_empty() {
            continue;
        }

        if let Ok(parsed) = Selector::parse(clause) {
            if let Some(element) = document.select(&parsed).next() {
                return Some(element.html());
            }
        }
    }

    if let Ok(body) = Selector::parse("body") {
        if let Some(element) = document.select(&body).next() {
            return Some(element.html());
        }
    }

    None
}

/// Converts the content root to Markdown bytes
fn capture_markdown(root_html: &str, url: &Url) -> Result<Vec<u8>, RenderError> {
    let converter = HtmlToMarkdown::builder()
        .skip_tags(SKIP_TAGS.to_vec())
        .build();

    converter
        .convert(root_html)
        .map(|markdown| markdown.into_bytes())
        .map_err(|e| RenderError::Capture {
            url: url.to_string(),
            message: e.to_string(),
        })
}
