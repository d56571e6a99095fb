//! Docbinder main entry point
//!
//! This is the command-line interface for the docbinder documentation crawler.

use clap::Parser;
use docbinder::assemble::assemble;
use docbinder::config::{
    validate, CrawlConfig, DEFAULT_CONTENT_SELECTOR, DEFAULT_MAX_DEPTH, DEFAULT_WAIT_MS,
};
use docbinder::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Docbinder: a documentation-site crawler and binder
///
/// Docbinder crawls a documentation website breadth-first from a single
/// starting URL, captures each page's main content as Markdown, and binds
/// the captures into one ordered document with a table of contents.
#[derive(Parser, Debug)]
#[command(name = "docbinder")]
#[command(version = "1.0.0")]
#[command(about = "Crawl a documentation site into one Markdown document", long_about = None)]
struct Cli {
    /// Starting URL for the crawl
    #[arg(short, long, value_name = "URL")]
    url: String,

    /// Output file path (defaults to <domain>-documentation.md)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Maximum link depth to follow from the starting URL
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u32,

    /// Only follow URLs containing this substring (repeatable)
    #[arg(short, long, value_name = "PATTERN")]
    include: Vec<String>,

    /// Never follow URLs containing this substring (repeatable)
    #[arg(short, long, value_name = "PATTERN")]
    exclude: Vec<String>,

    /// CSS selector list for the content root, tried left to right
    #[arg(short, long, value_name = "SELECTOR", default_value = DEFAULT_CONTENT_SELECTOR)]
    selector: String,

    /// Delay between page visits in milliseconds (0 disables)
    #[arg(short, long, value_name = "MS", default_value_t = DEFAULT_WAIT_MS)]
    wait: u64,

    /// Keep per-page files instead of merging them into one document
    #[arg(long)]
    skip_merge: bool,

    /// Validate the configuration and show what would be crawled
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence everything below error level
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging first so config validation failures are visible
    setup_logging(cli.verbose, cli.quiet);

    let config = config_from_cli(&cli);

    if let Err(e) = validate(&config) {
        tracing::error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    if cli.dry_run {
        handle_dry_run(&config)?;
        return Ok(());
    }

    handle_crawl(config).await
}

/// Builds the crawl configuration from parsed arguments
fn config_from_cli(cli: &Cli) -> CrawlConfig {
    CrawlConfig {
        url: cli.url.clone(),
        output: cli.output.clone(),
        max_depth: cli.depth,
        include: cli.include.clone(),
        exclude: cli.exclude.clone(),
        selector: cli.selector.clone(),
        wait_ms: cli.wait,
        skip_merge: cli.skip_merge,
    }
}

/// Builds the tracing subscriber from the verbosity flags
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("docbinder=info,warn"),
            1 => EnvFilter::new("docbinder=debug,info"),
            2 => EnvFilter::new("docbinder=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Reports the crawl plan without fetching anything
fn handle_dry_run(config: &CrawlConfig) -> anyhow::Result<()> {
    let seed = config.seed_url()?;

    println!("=== Docbinder Dry Run ===\n");

    println!("Crawl:");
    println!("  Seed URL: {}", seed);
    println!("  Domain: {}", seed.host_str().unwrap_or_default());
    println!("  Max depth: {}", config.max_depth);
    println!("  Wait between pages: {}ms", config.wait_ms);
    println!("  Content selector: {}", config.selector);

    println!("\nLink filters:");
    if config.include.is_empty() {
        println!("  Include: (all same-domain URLs)");
    } else {
        for pattern in &config.include {
            println!("  Include: {}", pattern);
        }
    }
    for pattern in &config.exclude {
        println!("  Exclude: {}", pattern);
    }

    println!("\nOutput:");
    if config.skip_merge {
        println!("  Mode: per-page files (merge skipped)");
    } else {
        println!("  Document: {}", config.output_path()?.display());
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would start crawling from {}", seed);

    Ok(())
}

/// Runs the crawl, then merges the captures or keeps the page files
async fn handle_crawl(config: CrawlConfig) -> anyhow::Result<()> {
    let seed = config.seed_url()?;
    let skip_merge = config.skip_merge;
    let output_path = config.output_path()?;

    if !skip_merge {
        tracing::info!("Output will be written to {}", output_path.display());
    }

    let outcome = match crawl(config).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    println!("\nCrawl finished in {:?}", outcome.report.duration);
    println!("  Pages visited:  {}", outcome.report.pages_visited);
    println!("  Pages captured: {}", outcome.report.pages_captured);
    println!("  Pages failed:   {}", outcome.report.pages_failed);

    if skip_merge {
        let dir = outcome.store.keep();
        println!("\n✓ Page files kept in: {}", dir.display());
        return Ok(());
    }

    let report = assemble(outcome.artifacts, seed.as_str(), &output_path)?;

    println!(
        "\n✓ Merged {} sections into: {}",
        report.sections_merged,
        report.output_path.display()
    );
    if report.sections_skipped > 0 {
        println!(
            "  ({} sections skipped due to read errors)",
            report.sections_skipped
        );
    }
    println!("  {} bytes written", report.bytes_written);

    Ok(())
}
