use crate::url::{derive_domain_name, normalize_candidate};
use crate::ConfigError;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Default content selector; the first clause doubles as the wait condition.
pub const DEFAULT_CONTENT_SELECTOR: &str = "main, article, .content, .documentation, body";

/// Default maximum traversal depth.
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Default delay between crawl iterations, in milliseconds.
pub const DEFAULT_WAIT_MS: u64 = 1000;

/// Resolved configuration for one docbinder run
///
/// Every option maps to a command-line flag; `with_seed` fills in the
/// documented defaults.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Seed URL the crawl starts from
    pub url: String,

    /// Output document path; derived from the seed's domain when absent
    pub output: Option<PathBuf>,

    /// Maximum traversal depth (the seed itself is depth 0)
    pub max_depth: u32,

    /// Substrings a URL must contain to be crawled (any one suffices)
    pub include: Vec<String>,

    /// Substrings that disqualify a URL
    pub exclude: Vec<String>,

    /// Comma-separated CSS selector clauses for the content root
    pub selector: String,

    /// Delay between crawl iterations in milliseconds; zero disables
    pub wait_ms: u64,

    /// Crawl without assembling; artifacts are kept and their location reported
    pub skip_merge: bool,
}

impl CrawlConfig {
    /// Creates a configuration with every option at its default
    pub fn with_seed(url: &str) -> Self {
        Self {
            url: url.to_string(),
            output: None,
            max_depth: DEFAULT_MAX_DEPTH,
            include: Vec::new(),
            exclude: Vec::new(),
            selector: DEFAULT_CONTENT_SELECTOR.to_string(),
            wait_ms: DEFAULT_WAIT_MS,
            skip_merge: false,
        }
    }

    /// Parses the seed URL into its canonical form
    pub fn seed_url(&self) -> Result<Url, ConfigError> {
        normalize_candidate(&self.url)
            .map_err(|e| ConfigError::InvalidUrl(format!("'{}': {}", self.url, e)))
    }

    /// Resolves the output path
    ///
    /// Defaults to `{domain}-documentation.md` in the working directory,
    /// with a leading `www.` stripped from the domain.
    pub fn output_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.output {
            return Ok(path.clone());
        }

        let seed = self.seed_url()?;
        let domain = derive_domain_name(&seed)
            .ok_or_else(|| ConfigError::InvalidUrl(format!("'{}' has no host", self.url)))?;

        Ok(PathBuf::from(format!("{}-documentation.md", domain)))
    }

    /// Politeness delay between crawl iterations
    pub fn wait_duration(&self) -> Duration {
        Duration::from_millis(self.wait_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::with_seed("https://docs.example.com/");
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.wait_ms, 1000);
        assert_eq!(config.selector, DEFAULT_CONTENT_SELECTOR);
        assert!(config.include.is_empty());
        assert!(config.exclude.is_empty());
        assert!(!config.skip_merge);
    }

    #[test]
    fn test_seed_url_strips_fragment() {
        let config = CrawlConfig::with_seed("https://docs.example.com/guide#intro");
        let seed = config.seed_url().unwrap();
        assert_eq!(seed.as_str(), "https://docs.example.com/guide");
    }

    #[test]
    fn test_seed_url_rejects_malformed() {
        let config = CrawlConfig::with_seed("not a url");
        assert!(config.seed_url().is_err());
    }

    #[test]
    fn test_default_output_derived_from_domain() {
        let config = CrawlConfig::with_seed("https://docs.example.com/guide");
        assert_eq!(
            config.output_path().unwrap(),
            PathBuf::from("docs.example.com-documentation.md")
        );
    }

    #[test]
    fn test_default_output_strips_www() {
        let config = CrawlConfig::with_seed("https://www.example.com/docs");
        assert_eq!(
            config.output_path().unwrap(),
            PathBuf::from("example.com-documentation.md")
        );
    }

    #[test]
    fn test_explicit_output_wins() {
        let mut config = CrawlConfig::with_seed("https://docs.example.com/");
        config.output = Some(PathBuf::from("manual.md"));
        assert_eq!(config.output_path().unwrap(), PathBuf::from("manual.md"));
    }

    #[test]
    fn test_wait_duration() {
        let mut config = CrawlConfig::with_seed("https://docs.example.com/");
        config.wait_ms = 250;
        assert_eq!(config.wait_duration(), Duration::from_millis(250));
    }
}
