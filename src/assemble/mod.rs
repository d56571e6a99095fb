//! Assembly module for docbinder
//!
//! Turns the run's captured artifacts into one ordered document with a
//! title page, a table of contents, and per-section separators.

mod assembler;
mod compose;

pub use assembler::{assemble, derive_title, order_artifacts, AssemblyError, AssemblyReport};
pub use compose::DocumentBuilder;
