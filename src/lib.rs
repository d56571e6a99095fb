//! Docbinder: a documentation-site crawler and binder
//!
//! This crate crawls a documentation website breadth-first from a single seed URL,
//! captures each visited page's main content as Markdown, and binds the captures
//! into one ordered document with a title page and a table of contents.

pub mod artifact;
pub mod assemble;
pub mod config;
pub mod crawler;
pub mod url;

use thiserror::Error;

/// Main error type for docbinder operations
#[derive(Debug, Error)]
pub enum BinderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Render error: {0}")]
    Render(#[from] crawler::RenderError),

    #[error("Assembly error: {0}")]
    Assembly(#[from] assemble::AssemblyError),

    #[error("Artifact store error: {0}")]
    Store(#[from] artifact::StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid seed URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid content selector: {0}")]
    InvalidSelector(String),

    #[error("Output location is not writable: {0}")]
    OutputNotWritable(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for docbinder operations
pub type Result<T> = std::result::Result<T, BinderError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use artifact::{ArtifactStore, PageArtifact};
pub use assemble::{AssemblyError, AssemblyReport};
pub use config::CrawlConfig;
pub use crawler::{
    crawl, CrawlOutcome, CrawlReport, Frontier, HttpRenderer, Orchestrator, PageRenderer,
    RenderError, RenderOptions, RenderedPage,
};
pub use url::{derive_domain_name, is_eligible, normalize_candidate};
