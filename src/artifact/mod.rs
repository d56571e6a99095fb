//! Artifact module for docbinder
//!
//! Captured page content is held as one file per visited URL inside a
//! run-scoped directory, then consumed exactly once by assembly.

mod store;

pub use store::{ArtifactStore, PageArtifact, StoreError};
