//! URL handling module for docbinder
//!
//! This module provides the crawl eligibility predicate, canonical URL
//! identity, and the URL-derived naming helpers used for artifact files and
//! display truncation.

mod filter;
mod naming;
mod normalize;

// Re-export main functions
pub use filter::is_eligible;
pub use naming::{artifact_file_stem, derive_domain_name, display_url};
pub use normalize::normalize_candidate;
