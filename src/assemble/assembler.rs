//! Assembly of captured artifacts into the final document
//!
//! Artifacts merge in a deterministic order: depth ascending, then URL
//! lexicographic. The order is a pure function of the artifact set and
//! never depends on crawl timing. A single unreadable artifact costs one
//! section, not the document.

use crate::artifact::PageArtifact;
use crate::assemble::compose::DocumentBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort assembly entirely
///
/// Per-artifact read failures are not represented here: those are logged,
/// counted as skipped sections, and assembly continues.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("Failed to write output {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What an assembly run produced
#[derive(Debug, Clone)]
pub struct AssemblyReport {
    /// Sections whose content made it into the document
    pub sections_merged: usize,

    /// Artifacts skipped because their content could not be read
    pub sections_skipped: usize,

    /// Size of the written document in bytes
    pub bytes_written: u64,

    /// Where the document was written
    pub output_path: PathBuf,
}

/// Sorts artifacts into merge order: depth ascending, then URL ascending
pub fn order_artifacts(artifacts: &mut [PageArtifact]) {
    artifacts.sort_by(|a, b| a.depth.cmp(&b.depth).then_with(|| a.url.cmp(&b.url)));
}

/// Derives the document title from the output file name
///
/// Hyphens become spaces and the extension is dropped, so
/// `docs.example.com-documentation.md` titles the document
/// `docs.example.com documentation`.
pub fn derive_title(output_path: &Path) -> String {
    output_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().replace('-', " "))
        .unwrap_or_else(|| "Documentation".to_string())
}

/// Merges captured artifacts into one document at `output_path`
///
/// The document opens with a title section and a table of contents listing
/// every artifact, followed by one separator-plus-content section per
/// artifact in merge order. Content bytes are appended unmodified.
///
/// # Arguments
///
/// * `artifacts` - The captured artifacts, in any order
/// * `seed_url` - The URL the crawl started from, shown on the title page
/// * `output_path` - Where to write the assembled document
pub fn assemble(
    mut artifacts: Vec<PageArtifact>,
    seed_url: &str,
    output_path: &Path,
) -> Result<AssemblyReport, AssemblyError> {
    order_artifacts(&mut artifacts);

    let mut builder = DocumentBuilder::new();
    builder.title_section(&derive_title(output_path), seed_url, artifacts.len());

    let toc_entries: Vec<(&str, u32)> = artifacts
        .iter()
        .map(|artifact| (artifact.url.as_str(), artifact.depth))
        .collect();
    builder.toc_section(&toc_entries);

    let mut merged = 0usize;
    let mut skipped = 0usize;

    for artifact in &artifacts {
        let bytes = match fs::read(&artifact.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Skipping artifact {}: {}", artifact.path.display(), e);
                skipped += 1;
                continue;
            }
        };

        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Skipping artifact {}: {}", artifact.path.display(), e);
                skipped += 1;
                continue;
            }
        };

        builder.section_separator(&artifact.url, artifact.depth);
        builder.append_content(&content);
        merged += 1;
    }

    let document = builder.finish();
    fs::write(output_path, &document).map_err(|source| AssemblyError::WriteOutput {
        path: output_path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        "Assembled {} sections into {} ({} bytes)",
        merged,
        output_path.display(),
        document.len()
    );

    Ok(AssemblyReport {
        sections_merged: merged,
        sections_skipped: skipped,
        bytes_written: document.len() as u64,
        output_path: output_path.to_path_buf(),
    })
}
