use crate::config::types::CrawlConfig;
use crate::ConfigError;
use scraper::Selector;

/// Validates the entire configuration
///
/// Runs once before the crawl starts; any failure here is fatal and the
/// process exits without touching the network.
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    config.seed_url()?;
    validate_selector(&config.selector)?;
    validate_patterns(&config.include, "include")?;
    validate_patterns(&config.exclude, "exclude")?;
    validate_output(config)?;
    Ok(())
}

/// Every selector clause must parse up front; a bad clause would otherwise
/// surface page by page during the crawl
fn validate_selector(selector: &str) -> Result<(), ConfigError> {
    let clauses: Vec<&str> = selector
        .split(',')
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .collect();

    if clauses.is_empty() {
        return Err(ConfigError::InvalidSelector(
            "selector cannot be empty".to_string(),
        ));
    }

    for clause in clauses {
        if Selector::parse(clause).is_err() {
            return Err(ConfigError::InvalidSelector(format!(
                "cannot parse clause '{}'",
                clause
            )));
        }
    }

    Ok(())
}

fn validate_patterns(patterns: &[String], which: &str) -> Result<(), ConfigError> {
    for pattern in patterns {
        if pattern.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{} patterns cannot be empty",
                which
            )));
        }
    }
    Ok(())
}

/// The output location must be writable before the crawl starts;
/// discovering it at merge time would waste the whole run
fn validate_output(config: &CrawlConfig) -> Result<(), ConfigError> {
    // Without a merge there is no output document to write.
    if config.skip_merge {
        return Ok(());
    }

    let path = config.output_path()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(ConfigError::OutputNotWritable(format!(
                "directory {} does not exist",
                parent.display()
            )));
        }
    }

    if path.is_dir() {
        return Err(ConfigError::OutputNotWritable(format!(
            "{} is a directory",
            path.display()
        )));
    }

    Ok(())
}
