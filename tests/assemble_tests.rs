//! Integration tests for document assembly
//!
//! These tests write real artifact files through the store and verify the
//! merged document's structure, ordering, and failure isolation.

use docbinder::artifact::{ArtifactStore, PageArtifact};
use docbinder::assemble::assemble;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Stores the given pages and returns their artifact records
fn store_pages(store: &mut ArtifactStore, pages: &[(&str, u32, &str)]) -> Vec<PageArtifact> {
    pages
        .iter()
        .map(|(url, depth, content)| {
            store
                .store(url, *depth, content.as_bytes())
                .expect("Failed to store artifact")
        })
        .collect()
}

#[test]
fn test_document_structure() {
    let mut store = ArtifactStore::new().unwrap();
    let artifacts = store_pages(
        &mut store,
        &[
            ("https://docs.example.com/", 0, "# Home\n\nWelcome text."),
            ("https://docs.example.com/guide", 1, "# Guide\n\nGuide text."),
            ("https://docs.example.com/api", 1, "# API\n\nAPI text."),
        ],
    );

    let out_dir = TempDir::new().unwrap();
    let output_path = out_dir.path().join("user-guide.md");

    let report =
        assemble(artifacts, "https://docs.example.com/", &output_path).expect("Assembly failed");

    assert_eq!(report.sections_merged, 3);
    assert_eq!(report.sections_skipped, 0);
    assert_eq!(report.output_path, output_path);

    let document = fs::read_to_string(&output_path).unwrap();

    // Title section
    assert!(document.starts_with("# user guide\n"));
    assert!(document.contains("Generated on "));
    assert!(document.contains("Total pages crawled: 3"));
    assert!(document.contains("Source: https://docs.example.com/"));

    // Table of contents, indented by depth
    assert!(document.contains("## Table of Contents"));
    assert!(document.contains("\n- https://docs.example.com/\n"));
    assert!(document.contains("\n  - https://docs.example.com/api\n"));
    assert!(document.contains("\n  - https://docs.example.com/guide\n"));

    // Section separators carry the URL and depth
    assert!(document.contains("\n## https://docs.example.com/\n"));
    assert!(document.contains("*Depth: 0*"));
    assert!(document.contains("\n### https://docs.example.com/guide\n"));
    assert!(document.contains("*Depth: 1*"));

    // Captured content made it through
    assert!(document.contains("Welcome text."));
    assert!(document.contains("Guide text."));
    assert!(document.contains("API text."));

    assert_eq!(report.bytes_written, document.len() as u64);
}

#[test]
fn test_assembly_is_independent_of_input_order() {
    let mut store = ArtifactStore::new().unwrap();
    let artifacts = store_pages(
        &mut store,
        &[
            ("https://docs.example.com/guide", 1, "guide"),
            ("https://docs.example.com/", 0, "home"),
            ("https://docs.example.com/api", 1, "api"),
        ],
    );

    let mut reversed = artifacts.clone();
    reversed.reverse();

    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    let path_a = dir_a.path().join("site-docs.md");
    let path_b = dir_b.path().join("site-docs.md");

    assemble(artifacts, "https://docs.example.com/", &path_a).unwrap();
    assemble(reversed, "https://docs.example.com/", &path_b).unwrap();

    let doc_a = fs::read_to_string(&path_a).unwrap();
    let doc_b = fs::read_to_string(&path_b).unwrap();
    assert_eq!(doc_a, doc_b);
}

#[test]
fn test_sections_ordered_by_depth_then_url() {
    let mut store = ArtifactStore::new().unwrap();
    let artifacts = store_pages(
        &mut store,
        &[
            ("https://docs.example.com/zeta", 1, "zeta content"),
            ("https://docs.example.com/beta", 0, "beta content"),
            ("https://docs.example.com/alpha", 1, "alpha content"),
        ],
    );

    let out_dir = TempDir::new().unwrap();
    let output_path = out_dir.path().join("ordered.md");
    assemble(artifacts, "https://docs.example.com/", &output_path).unwrap();

    let document = fs::read_to_string(&output_path).unwrap();

    let beta = document
        .find("\n## https://docs.example.com/beta\n")
        .expect("beta section missing");
    let alpha = document
        .find("\n### https://docs.example.com/alpha\n")
        .expect("alpha section missing");
    let zeta = document
        .find("\n### https://docs.example.com/zeta\n")
        .expect("zeta section missing");

    assert!(beta < alpha, "depth 0 must precede depth 1");
    assert!(alpha < zeta, "same-depth sections must sort by URL");
}

#[test]
fn test_unreadable_artifact_costs_one_section() {
    let mut store = ArtifactStore::new().unwrap();
    let mut artifacts = store_pages(
        &mut store,
        &[
            ("https://docs.example.com/", 0, "home"),
            ("https://docs.example.com/guide", 1, "guide"),
        ],
    );
    artifacts.push(PageArtifact {
        url: "https://docs.example.com/ghost".to_string(),
        depth: 1,
        path: store.dir_path().join("never-written.md"),
    });

    let out_dir = TempDir::new().unwrap();
    let output_path = out_dir.path().join("partial.md");
    let report = assemble(artifacts, "https://docs.example.com/", &output_path).unwrap();

    assert_eq!(report.sections_merged, 2);
    assert_eq!(report.sections_skipped, 1);

    let document = fs::read_to_string(&output_path).unwrap();

    // The ghost still appears in the table of contents but contributes
    // no section.
    assert!(document.contains("- https://docs.example.com/ghost"));
    assert!(!document.contains("\n### https://docs.example.com/ghost\n"));
}

#[test]
fn test_non_utf8_artifact_is_skipped() {
    let mut store = ArtifactStore::new().unwrap();
    let good = store
        .store("https://docs.example.com/good", 0, b"fine text")
        .unwrap();
    let bad = store
        .store("https://docs.example.com/bad", 0, &[0xff, 0xfe, 0x00])
        .unwrap();

    let out_dir = TempDir::new().unwrap();
    let output_path = out_dir.path().join("mixed.md");
    let report = assemble(vec![good, bad], "https://docs.example.com/", &output_path).unwrap();

    assert_eq!(report.sections_merged, 1);
    assert_eq!(report.sections_skipped, 1);

    let document = fs::read_to_string(&output_path).unwrap();
    assert!(document.contains("fine text"));
}

#[test]
fn test_empty_crawl_still_produces_document() {
    let out_dir = TempDir::new().unwrap();
    let output_path = out_dir.path().join("empty-site.md");

    let report = assemble(Vec::new(), "https://docs.example.com/", &output_path).unwrap();

    assert_eq!(report.sections_merged, 0);

    let document = fs::read_to_string(&output_path).unwrap();
    assert!(document.starts_with("# empty site\n"));
    assert!(document.contains("Total pages crawled: 0"));
    assert!(document.contains("## Table of Contents"));
}

#[test]
fn test_unwritable_output_is_an_error() {
    let result = assemble(
        Vec::new(),
        "https://docs.example.com/",
        Path::new("/nonexistent-docbinder-dir/out.md"),
    );
    assert!(result.is_err());
}
