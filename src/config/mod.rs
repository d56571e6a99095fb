//! Configuration module for docbinder
//!
//! All configuration arrives on the command line; this module holds the
//! resolved settings, their derived helpers (seed URL, output path), and
//! the one-shot validation that runs before a crawl starts.
//!
//! # Example
//!
//! ```
//! use docbinder::config::{validate, CrawlConfig};
//!
//! let mut config = CrawlConfig::with_seed("https://docs.example.com/");
//! config.max_depth = 2;
//! validate(&config).unwrap();
//! ```

mod types;
mod validation;

// Re-export types
pub use types::{CrawlConfig, DEFAULT_CONTENT_SELECTOR, DEFAULT_MAX_DEPTH, DEFAULT_WAIT_MS};

// Re-export validation
pub use validation::validate;
