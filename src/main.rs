//! Link-Crawler main entry point
//!
//! This is the command-line interface for the Link-Crawler link crawler.

use anyhow::{bail, Context};
use clap::Parser;
use link_crawler::config::{load_config_with_hash, Config};
use link_crawler::crawler::Crawler;
use link_crawler::output::{generate_markdown_summary, print_links, CrawlSummary};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Link-Crawler: a depth-bounded web link crawler
///
/// Fetches the seed page, follows links on the same host up to the given
/// depth and lists every internal and external link found.
#[derive(Parser, Debug)]
#[command(name = "link-crawler")]
#[command(version)]
#[command(about = "A depth-bounded web link crawler", long_about = None)]
struct Cli {
    /// Seed URL (overrides `seed-url` from the config file)
    #[arg(value_name = "URL")]
    seed: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum link-following depth from the seed page
    #[arg(short, long)]
    depth: Option<u32>,

    /// Record links without probing whether they exist
    #[arg(long)]
    no_check_exists: bool,

    /// Only record and report internal links
    #[arg(long, conflicts_with = "only_external")]
    only_internal: bool,

    /// Only record and report external links
    #[arg(long, conflicts_with = "only_internal")]
    only_external: bool,

    /// URL to skip entirely (repeatable)
    #[arg(long = "ignore", value_name = "URL")]
    ignore: Vec<String>,

    /// Log every skip/found decision
    #[arg(long)]
    debug: bool,

    /// Write a markdown summary to this path
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet, cli.debug);

    let (config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };

    let config = apply_cli_overrides(config, &cli);

    let seed = match cli.seed.as_deref().or(config.seed_url.as_deref()) {
        Some(seed) => seed.to_string(),
        None => bail!("no seed URL given (pass one as an argument or set seed-url in the config)"),
    };

    let mut crawler = Crawler::with_http_config(&seed, config.crawl.clone(), &config.http)
        .context("failed to set up crawler")?;

    let started_at = chrono::Utc::now();
    crawler.crawl().await;
    let finished_at = chrono::Utc::now();

    let mut summary = CrawlSummary::from_crawler(&crawler, started_at, finished_at);
    if let Some(hash) = config_hash {
        summary = summary.with_config_hash(hash);
    }

    if !cli.quiet {
        print_links(&summary);
    }

    let summary_path = cli
        .summary
        .clone()
        .or_else(|| config.output.summary_path.as_ref().map(PathBuf::from));
    if let Some(path) = summary_path {
        write_summary(&summary, &path)?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// `--debug` needs at least info level for the decision trace to show.
fn setup_logging(verbose: u8, quiet: bool, debug: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 if debug => EnvFilter::new("link_crawler=info,warn"),
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("link_crawler=info,warn"),
            2 => EnvFilter::new("link_crawler=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Layers command-line flags over the file (or default) configuration
fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(depth) = cli.depth {
        config.crawl.depth = depth;
    }
    if cli.no_check_exists {
        config.crawl.check_url_exists = false;
    }
    if cli.only_internal {
        config.crawl.only_internal = true;
    }
    if cli.only_external {
        config.crawl.only_external = true;
    }
    if cli.debug {
        config.crawl.debug = true;
    }
    config.crawl.ignore_links.extend(cli.ignore.iter().cloned());
    config
}

fn write_summary(summary: &CrawlSummary, path: &Path) -> anyhow::Result<()> {
    generate_markdown_summary(summary, path)
        .with_context(|| format!("failed to write summary to {}", path.display()))?;
    tracing::info!("Summary written to {}", path.display());
    Ok(())
}
