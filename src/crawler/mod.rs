//! Crawler module for page traversal and capture
//!
//! This module contains the core crawling logic, including:
//! - Frontier bookkeeping (pending queue, visited set, depth records)
//! - The renderer seam that turns a URL into links plus captured content
//! - An HTTP renderer implementing that seam over reqwest
//! - Overall crawl orchestration

mod frontier;
mod http_renderer;
mod orchestrator;
mod renderer;

pub use frontier::{CrawlTarget, Frontier};
pub use http_renderer::{build_http_client, HttpRenderer};
pub use orchestrator::{CrawlReport, Orchestrator};
pub use renderer::{
    PageRenderer, RenderError, RenderOptions, RenderedPage, DEFAULT_NAVIGATION_TIMEOUT,
    DEFAULT_SELECTOR_TIMEOUT,
};

use crate::artifact::{ArtifactStore, PageArtifact};
use crate::config::CrawlConfig;
use crate::BinderError;

/// Everything a finished crawl hands back to the caller
pub struct CrawlOutcome {
    /// Captured artifacts in capture order
    pub artifacts: Vec<PageArtifact>,

    /// The store holding the artifact files; dropping it removes them
    pub store: ArtifactStore,

    /// Run counters
    pub report: CrawlReport,
}

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client and renderer
/// 2. Create the artifact store
/// 3. Seed the frontier and walk it to exhaustion
/// 4. Capture one artifact per successfully visited page
///
/// # Arguments
///
/// * `config` - The validated crawl configuration
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - Artifacts, their backing store, and run counters
/// * `Err(BinderError)` - Startup failed before the loop began
pub async fn crawl(config: CrawlConfig) -> Result<CrawlOutcome, BinderError> {
    let renderer = HttpRenderer::new()?;
    let mut store = ArtifactStore::new()?;

    let mut orchestrator = Orchestrator::new(config, renderer)?;
    let (artifacts, report) = orchestrator.run(&mut store).await;

    Ok(CrawlOutcome {
        artifacts,
        store,
        report,
    })
}
