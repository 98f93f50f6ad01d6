//! Output module for reporting crawl results
//!
//! This module handles:
//! - Capturing the result of a crawl as a `CrawlSummary`
//! - Generating markdown summaries
//! - Printing discovered links to the terminal

mod markdown;
mod text;

pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use text::{format_links, print_links};

use crate::crawler::Crawler;
use crate::state::LinkType;
use crate::url::extract_host;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Snapshot of a finished crawl
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    pub seed_url: String,
    pub depth: u32,
    /// Human readable link-type filter, e.g. "internal only"
    pub filter: String,
    pub check_url_exists: bool,
    pub only_internal: bool,
    pub only_external: bool,
    /// SHA-256 of the configuration file, when one was used
    pub config_hash: Option<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub pages_visited: usize,
    pub internal_links: Vec<String>,
    pub external_links: Vec<String>,
}

impl CrawlSummary {
    /// Captures the current results of `crawler`
    pub fn from_crawler<F>(
        crawler: &Crawler<F>,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let options = crawler.options();
        Self {
            seed_url: crawler.url().to_string(),
            depth: crawler.depth(),
            filter: options.filter_label().to_string(),
            check_url_exists: options.check_url_exists,
            only_internal: options.only_internal,
            only_external: options.only_external,
            config_hash: None,
            started_at,
            finished_at,
            pages_visited: crawler.pages_visited(),
            internal_links: crawler.collection().get(LinkType::Internal).to_vec(),
            external_links: crawler.collection().get(LinkType::External).to_vec(),
        }
    }

    pub fn with_config_hash(mut self, hash: impl Into<String>) -> Self {
        self.config_hash = Some(hash.into());
        self
    }

    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds().max(0)
    }

    pub fn total_links(&self) -> usize {
        self.internal_links.len() + self.external_links.len()
    }

    /// Distinct hosts of the external links, sorted
    pub fn external_hosts(&self) -> Vec<String> {
        self.external_links
            .iter()
            .filter_map(|link| extract_host(link))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
