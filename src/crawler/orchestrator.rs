//! Crawl orchestration: the main traversal loop
//!
//! This module drives a crawl end to end: pull the next target from the
//! frontier, gate on visited state and the depth bound, delegate the visit
//! to the renderer, screen discovered links back into the frontier, store
//! the captured artifact, and pause between iterations. One failing page
//! never stops the loop.

use crate::artifact::{ArtifactStore, PageArtifact};
use crate::config::CrawlConfig;
use crate::crawler::frontier::{CrawlTarget, Frontier};
use crate::crawler::renderer::{PageRenderer, RenderOptions};
use crate::url::is_eligible;
use crate::ConfigError;
use std::time::{Duration, Instant};
use url::Url;

/// Counters describing a finished crawl
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// Targets that entered processing (marked visited)
    pub pages_visited: usize,

    /// Pages whose artifact was captured and stored
    pub pages_captured: usize,

    /// Pages whose visit failed; they stay visited but unproductive
    pub pages_failed: usize,

    /// Dequeued targets dropped for exceeding the depth bound
    pub pages_skipped_depth: usize,

    /// Links discovered across all processed pages, before screening
    pub links_discovered: usize,

    /// Links that passed screening and entered the frontier
    pub links_enqueued: usize,

    /// Wall-clock duration of the crawl
    pub duration: Duration,
}

/// Drives a crawl from the seed to an exhausted frontier
///
/// The orchestrator owns the frontier and is its only writer; the renderer
/// is the single collaborator it delegates page visits to.
pub struct Orchestrator<R: PageRenderer> {
    config: CrawlConfig,
    seed: Url,
    renderer: R,
    frontier: Frontier,
    options: RenderOptions,
}

impl<R: PageRenderer> Orchestrator<R> {
    /// Creates an orchestrator for one crawl run
    ///
    /// The seed enters the frontier at depth zero.
    ///
    /// # Arguments
    ///
    /// * `config` - The validated run configuration
    /// * `renderer` - The renderer that will serve every page visit
    pub fn new(config: CrawlConfig, renderer: R) -> Result<Self, ConfigError> {
        let seed = config.seed_url()?;
        let options = RenderOptions {
            selector: config.selector.clone(),
            ..RenderOptions::default()
        };

        let mut frontier = Frontier::new();
        frontier.enqueue(seed.as_str(), 0);

        Ok(Self {
            config,
            seed,
            renderer,
            frontier,
            options,
        })
    }

    /// Runs the crawl loop until the frontier is exhausted
    ///
    /// Captured artifacts are written into `store`; the returned list holds
    /// them in capture order together with the run counters.
    pub async fn run(&mut self, store: &mut ArtifactStore) -> (Vec<PageArtifact>, CrawlReport) {
        let start = Instant::now();
        let mut artifacts = Vec::new();
        let mut report = CrawlReport::default();

        tracing::info!(
            "Starting crawl of {} (domain: {}, max depth: {})",
            self.seed,
            self.seed.host_str().unwrap_or_default(),
            self.config.max_depth
        );
        if !self.config.include.is_empty() {
            tracing::info!("Include patterns: {:?}", self.config.include);
        }
        if !self.config.exclude.is_empty() {
            tracing::info!("Exclude patterns: {:?}", self.config.exclude);
        }

        while let Some(target) = self.frontier.dequeue_next() {
            if self.frontier.is_visited(&target.url) {
                continue;
            }

            if target.depth > self.config.max_depth {
                tracing::info!(
                    "Skipping {} at depth {} (limit {})",
                    target.url,
                    target.depth,
                    self.config.max_depth
                );
                report.pages_skipped_depth += 1;
                continue;
            }

            // Visited is marked before the visit so a page linking to
            // itself cannot re-enter the frontier mid-render.
            self.frontier.mark_visited(&target.url);
            report.pages_visited += 1;

            tracing::info!("[depth {}] processing {}", target.depth, target.url);

            match self.process_target(&target, store, &mut report).await {
                Ok(artifact) => {
                    artifacts.push(artifact);
                    report.pages_captured += 1;
                }
                Err(e) => {
                    tracing::error!("Failed to process {}: {}", target.url, e);
                    report.pages_failed += 1;
                }
            }

            // Politeness delay after processed targets only; skips above
            // never touched the network.
            if self.config.wait_ms > 0 && !self.frontier.is_empty() {
                tokio::time::sleep(self.config.wait_duration()).await;
            }
        }

        report.duration = start.elapsed();
        tracing::info!(
            "Crawl complete: {} visited, {} captured, {} failed in {:?}",
            report.pages_visited,
            report.pages_captured,
            report.pages_failed,
            report.duration
        );

        (artifacts, report)
    }

    /// Visits one target: render, screen links, store the artifact
    async fn process_target(
        &mut self,
        target: &CrawlTarget,
        store: &mut ArtifactStore,
        report: &mut CrawlReport,
    ) -> crate::Result<PageArtifact> {
        let url = Url::parse(&target.url)?;

        let page = self.renderer.fetch_and_capture(&url, &self.options).await?;

        self.enqueue_discovered(&page.links, target.depth, report);

        let artifact = store.store(&target.url, target.depth, &page.content)?;

        Ok(artifact)
    }

    /// Screens discovered links and queues survivors one level deeper
    fn enqueue_discovered(&mut self, links: &[String], depth: u32, report: &mut CrawlReport) {
        for link in links {
            report.links_discovered += 1;

            if !is_eligible(link, &self.seed, &self.config.include, &self.config.exclude) {
                tracing::debug!("Rejected link {}", link);
                continue;
            }

            if self.frontier.enqueue(link, depth + 1) {
                report.links_enqueued += 1;
            }
        }
    }
}
