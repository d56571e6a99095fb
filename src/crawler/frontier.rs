//! Frontier management for the crawl loop
//!
//! This module owns:
//! - The FIFO queue of discovered targets awaiting a visit
//! - The visited set (a URL is processed at most once per run)
//! - First-seen depth bookkeeping for every discovered URL

use std::collections::{HashMap, HashSet, VecDeque};

/// A URL queued for visiting together with its traversal depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTarget {
    /// The normalized URL to visit
    pub url: String,

    /// Link distance from the seed (the seed itself is depth 0)
    pub depth: u32,
}

/// Frontier tracks which URLs are pending, visited, and at what depth
///
/// Targets leave the frontier in discovery order rather than strict
/// depth-layer order; deterministic ordering is the assembler's job, not
/// the traversal's. The depth recorded at first discovery is authoritative:
/// re-discovering a URL through a longer path never deepens it and
/// re-discovering it through a shorter one never rescues it.
#[derive(Debug)]
pub struct Frontier {
    /// Targets awaiting a visit, in discovery order
    pending: VecDeque<CrawlTarget>,

    /// URLs currently somewhere in `pending`
    queued: HashSet<String>,

    /// URLs that have entered processing at least once
    visited: HashSet<String>,

    /// Depth at which each URL was first discovered
    depths: HashMap<String, u32>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            queued: HashSet::new(),
            visited: HashSet::new(),
            depths: HashMap::new(),
        }
    }

    /// Adds a URL to the pending queue
    ///
    /// The call is a no-op when the URL was already visited or is already
    /// pending. The depth is recorded only if the URL has never been seen
    /// before, so the first discovery wins.
    ///
    /// # Arguments
    ///
    /// * `url` - The normalized URL to queue
    /// * `depth` - The depth at which the URL was discovered
    ///
    /// # Returns
    ///
    /// `true` if the URL was queued, `false` if it was refused
    pub fn enqueue(&mut self, url: &str, depth: u32) -> bool {
        if self.visited.contains(url) || self.queued.contains(url) {
            return false;
        }

        self.queued.insert(url.to_string());
        self.depths.entry(url.to_string()).or_insert(depth);
        self.pending.push_back(CrawlTarget {
            url: url.to_string(),
            depth,
        });

        true
    }

    /// Removes and returns the next target in discovery order
    ///
    /// The returned depth is the first-seen depth, which may differ from
    /// the depth the pending entry was enqueued with if the URL had been
    /// discovered before (for example dropped at the depth bound and later
    /// re-discovered).
    pub fn dequeue_next(&mut self) -> Option<CrawlTarget> {
        let entry = self.pending.pop_front()?;
        self.queued.remove(&entry.url);

        let depth = self.depths.get(&entry.url).copied().unwrap_or(entry.depth);

        Some(CrawlTarget {
            url: entry.url,
            depth,
        })
    }

    /// Marks a URL as visited; calling it again for the same URL has no effect
    pub fn mark_visited(&mut self, url: &str) {
        self.visited.insert(url.to_string());
    }

    /// Returns whether a URL has already been visited
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Returns the depth at which a URL was first discovered
    pub fn first_seen_depth(&self, url: &str) -> Option<u32> {
        self.depths.get(url).copied()
    }

    /// Returns the number of visited URLs
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Returns the number of targets awaiting a visit
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether the pending queue is empty
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}
