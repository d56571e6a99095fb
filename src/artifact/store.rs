//! Run-scoped artifact storage
//!
//! Captured page content lives on disk for the duration of a run inside a
//! temporary directory. The directory disappears when the store is dropped
//! unless the caller keeps it (crawl-only mode, where the artifacts are the
//! deliverable).

use crate::url::artifact_file_stem;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use thiserror::Error;

/// Errors from artifact persistence
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to create artifact directory: {0}")]
    Create(#[source] std::io::Error),

    #[error("Failed to write artifact {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A captured page: where its content sits and its place in the crawl
#[derive(Debug, Clone)]
pub struct PageArtifact {
    /// The URL the content was captured from
    pub url: String,

    /// Traversal depth at capture time
    pub depth: u32,

    /// Location of the captured Markdown on disk
    pub path: PathBuf,
}

/// Disk store for one crawl run's artifacts
pub struct ArtifactStore {
    dir: TempDir,
    used_names: HashSet<String>,
}

impl ArtifactStore {
    /// Creates a store backed by a fresh temporary directory
    pub fn new() -> Result<Self, StoreError> {
        let dir = tempfile::Builder::new()
            .prefix("docbinder-")
            .tempdir()
            .map_err(StoreError::Create)?;

        Ok(Self {
            dir,
            used_names: HashSet::new(),
        })
    }

    /// Returns the directory artifacts are written into
    pub fn dir_path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes one captured page and returns its artifact record
    ///
    /// File names derive from the URL. Names that collide once the stem is
    /// truncated get a numeric suffix instead of overwriting an earlier
    /// capture.
    pub fn store(
        &mut self,
        url: &str,
        depth: u32,
        content: &[u8],
    ) -> Result<PageArtifact, StoreError> {
        let file_name = self.claim_file_name(url);
        let path = self.dir.path().join(&file_name);

        fs::write(&path, content).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!("Stored artifact {} for {}", file_name, url);

        Ok(PageArtifact {
            url: url.to_string(),
            depth,
            path,
        })
    }

    fn claim_file_name(&mut self, url: &str) -> String {
        let stem = artifact_file_stem(url);
        let stem = if stem.is_empty() {
            "page".to_string()
        } else {
            stem
        };

        let mut candidate = format!("{}.md", stem);
        let mut counter = 2;
        while self.used_names.contains(&candidate) {
            candidate = format!("{}_{}.md", stem, counter);
            counter += 1;
        }

        self.used_names.insert(candidate.clone());
        candidate
    }

    /// Persists the artifact directory beyond the store's lifetime
    ///
    /// Returns the directory path, which the caller now owns.
    pub fn keep(self) -> PathBuf {
        self.dir.keep()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_writes_content() {
        let mut store = ArtifactStore::new().unwrap();
        let artifact = store
            .store("https://docs.example.com/guide", 1, b"# Guide\n")
            .unwrap();

        assert_eq!(artifact.url, "https://docs.example.com/guide");
        assert_eq!(artifact.depth, 1);
        assert!(artifact.path.ends_with("docs_example_com_guide.md"));
        assert_eq!(fs::read(&artifact.path).unwrap(), b"# Guide\n");
    }

    #[test]
    fn test_distinct_urls_get_distinct_files() {
        let mut store = ArtifactStore::new().unwrap();
        let first = store
            .store("https://docs.example.com/a", 0, b"a")
            .unwrap();
        let second = store
            .store("https://docs.example.com/b", 0, b"b")
            .unwrap();

        assert_ne!(first.path, second.path);
    }

    #[test]
    fn test_truncation_collision_gets_numeric_suffix() {
        let mut store = ArtifactStore::new().unwrap();
        let base = format!("https://docs.example.com/{}", "a".repeat(120));

        let first = store.store(&format!("{}/one", base), 2, b"one").unwrap();
        let second = store.store(&format!("{}/two", base), 2, b"two").unwrap();
        let third = store.store(&format!("{}/three", base), 2, b"three").unwrap();

        assert_ne!(first.path, second.path);
        assert_ne!(second.path, third.path);
        assert!(second.path.to_string_lossy().ends_with("_2.md"));
        assert!(third.path.to_string_lossy().ends_with("_3.md"));

        assert_eq!(fs::read(&first.path).unwrap(), b"one");
        assert_eq!(fs::read(&second.path).unwrap(), b"two");
    }

    #[test]
    fn test_drop_releases_directory() {
        let dir_path;
        {
            let mut store = ArtifactStore::new().unwrap();
            store
                .store("https://docs.example.com/page", 0, b"content")
                .unwrap();
            dir_path = store.dir_path().to_path_buf();
            assert!(dir_path.exists());
        }
        assert!(!dir_path.exists());
    }

    #[test]
    fn test_keep_persists_directory() {
        let mut store = ArtifactStore::new().unwrap();
        store
            .store("https://docs.example.com/page", 0, b"content")
            .unwrap();

        let kept = store.keep();
        assert!(kept.exists());
        assert!(kept.join("docs_example_com_page.md").exists());

        fs::remove_dir_all(&kept).unwrap();
    }
}
