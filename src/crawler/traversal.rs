//! Depth-bounded link traversal
//!
//! `Crawler` owns the seed, the crawl options, the visited set and the link
//! collection. A crawl descends depth first from the seed page: every anchor
//! is resolved against the seed origin, same-host links are entered with one
//! less unit of depth, and every link that passes the filters is recorded
//! after its subtree has been explored.

use crate::config::{validate_filters, validate_http_config, CrawlOptions, HttpConfig};
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::crawler::parser::parse_html;
use crate::state::{LinkCollection, LinkType, VisitedSet};
use crate::url::{classify, is_valid_url, parse_seed, resolve_href, SeedUrl};
use crate::{ConfigError, CrawlError};
use reqwest::Client;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

/// Depth-bounded link crawler
///
/// The crawl future is `Send` whenever the fetcher is `Send + Sync`, so a
/// crawl can run on a spawned task.
///
/// # Example
///
/// ```no_run
/// use link_crawler::config::CrawlOptions;
/// use link_crawler::crawler::Crawler;
///
/// # async fn example() -> Result<(), link_crawler::CrawlError> {
/// let options = CrawlOptions::default().with_depth(2);
/// let mut crawler = Crawler::new("https://example.com", options)?;
///
/// for link in crawler.crawl().await.internal_links()? {
///     println!("{}", link);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Crawler<F = HttpFetcher> {
    seed: SeedUrl,
    options: CrawlOptions,
    fetcher: F,
    visited: VisitedSet,
    links: LinkCollection,
    probe_cache: HashMap<String, bool>,
}

impl Crawler<HttpFetcher> {
    /// Creates a crawler using an HTTP client with default settings
    ///
    /// # Errors
    ///
    /// * `CrawlError::InvalidInput` - `seed_url` is not a valid absolute URL
    /// * `CrawlError::ConfigurationConflict` - both link-type filters are set
    pub fn new(seed_url: &str, options: CrawlOptions) -> Result<Self, CrawlError> {
        Self::with_http_config(seed_url, options, &HttpConfig::default())
    }

    /// Creates a crawler whose HTTP client is built from `http`
    ///
    /// Zero timeouts, a zero redirect limit or an empty user agent are
    /// rejected as `CrawlError::InvalidInput`.
    pub fn with_http_config(
        seed_url: &str,
        options: CrawlOptions,
        http: &HttpConfig,
    ) -> Result<Self, CrawlError> {
        let seed = validate_inputs(seed_url, &options)?;
        validate_http_config(http).map_err(|e| CrawlError::InvalidInput(e.to_string()))?;
        let fetcher = HttpFetcher::new(http)?;
        Ok(Self::assemble(seed, options, fetcher))
    }

    /// Creates a crawler around an already configured `reqwest` client
    pub fn with_client(
        seed_url: &str,
        options: CrawlOptions,
        client: Client,
    ) -> Result<Self, CrawlError> {
        Self::with_fetcher(seed_url, options, HttpFetcher::from_client(client))
    }
}

impl<F: PageFetcher + Send + Sync> Crawler<F> {
    /// Creates a crawler that uses `fetcher` for all network access
    pub fn with_fetcher(
        seed_url: &str,
        options: CrawlOptions,
        fetcher: F,
    ) -> Result<Self, CrawlError> {
        let seed = validate_inputs(seed_url, &options)?;
        Ok(Self::assemble(seed, options, fetcher))
    }

    fn assemble(seed: SeedUrl, options: CrawlOptions, fetcher: F) -> Self {
        Self {
            seed,
            options,
            fetcher,
            visited: VisitedSet::new(),
            links: LinkCollection::new(),
            probe_cache: HashMap::new(),
        }
    }

    /// Runs the crawl from the seed URL and returns the crawler for chaining
    ///
    /// Network and parse failures never surface here; the affected URL is
    /// skipped. Each call starts from a clean state, so calling it again
    /// re-crawls instead of resuming.
    pub async fn crawl(&mut self) -> &mut Self {
        self.visited.clear();
        self.links.clear();
        self.probe_cache.clear();

        let started = Instant::now();
        tracing::info!(
            "Crawling {} (depth {}, {})",
            self.seed.url,
            self.options.depth,
            self.options.filter_label()
        );

        let seed = self.seed.url.clone();
        self.visit_page(seed, self.options.depth).await;

        tracing::info!(
            "Crawl completed: {} pages visited, {} internal and {} external links in {:?}",
            self.visited.len(),
            self.links.get(LinkType::Internal).len(),
            self.links.get(LinkType::External).len(),
            started.elapsed()
        );

        self
    }

    /// Enters `url` and processes every anchor on it
    ///
    /// The URL is marked visited before it is fetched, so a failed fetch or a
    /// page linking to itself never leads to a second visit.
    fn visit_page<'a>(
        &'a mut self,
        url: String,
        remaining_depth: u32,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>>
    where
        F: 'a,
    {
        Box::pin(async move {
            if remaining_depth == 0 {
                self.trace_decision("skip page (depth exhausted)", &url);
                return;
            }

            if self.options.ignore_links.contains(&url) {
                self.trace_decision("skip page (ignored)", &url);
                return;
            }

            if !self.visited.mark(&url) {
                self.trace_decision("skip page (already visited)", &url);
                return;
            }

            if self.options.check_url_exists && !self.url_exists(&url).await {
                self.trace_decision("skip page (probe failed)", &url);
                return;
            }

            let body = match self.fetcher.fetch_page(&url).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!("Failed to fetch {}: {}", url, e);
                    self.trace_decision("skip page (fetch failed)", &url);
                    return;
                }
            };

            let page = parse_html(&body);
            tracing::debug!(
                "Visiting {} ({} anchors, title: {})",
                url,
                page.hrefs.len(),
                page.title.as_deref().unwrap_or("-")
            );
            drop(body);

            for href in &page.hrefs {
                self.process_url(href, remaining_depth).await;
            }
        })
    }

    /// Resolves one href, descends into it if internal, then records it
    async fn process_url(&mut self, href: &str, remaining_depth: u32) {
        let url = resolve_href(href, &self.seed.origin);

        if !is_valid_url(&url) {
            self.trace_decision("skip link (invalid url)", &url);
            return;
        }

        let link_type = classify(&url, &self.seed.host);
        if link_type == LinkType::Internal {
            self.visit_page(url.clone(), remaining_depth.saturating_sub(1))
                .await;
        }

        self.add_link(&url, link_type).await;
    }

    /// Records `url` under `link_type` if it passes filters, ignore-list,
    /// dedup and (when enabled) the existence probe
    async fn add_link(&mut self, url: &str, link_type: LinkType) {
        if self.is_suppressed(link_type) {
            self.trace_decision("skip link (filtered by type)", url);
            return;
        }

        if self.options.ignore_links.contains(url) {
            self.trace_decision("skip link (ignored)", url);
            return;
        }

        if self.links.contains(url, link_type) {
            return;
        }

        if self.options.check_url_exists && !self.url_exists(url).await {
            self.trace_decision("skip link (probe failed)", url);
            return;
        }

        if self.links.insert(url, link_type) {
            let decision = match link_type {
                LinkType::Internal => "found internal link",
                LinkType::External => "found external link",
            };
            self.trace_decision(decision, url);
        }
    }

    /// Probes `url`, answering from the per-run cache when possible
    ///
    /// Any transport error or a final status outside 2xx counts as missing.
    async fn url_exists(&mut self, url: &str) -> bool {
        if let Some(&exists) = self.probe_cache.get(url) {
            return exists;
        }

        let exists = match self.fetcher.probe(url).await {
            Ok(status) => (200..300).contains(&status),
            Err(e) => {
                tracing::debug!("Probe failed for {}: {}", url, e);
                false
            }
        };

        self.probe_cache.insert(url.to_string(), exists);
        exists
    }

    fn is_suppressed(&self, link_type: LinkType) -> bool {
        match link_type {
            LinkType::Internal => self.options.only_external,
            LinkType::External => self.options.only_internal,
        }
    }

    fn trace_decision(&self, decision: &str, url: &str) {
        if self.options.debug {
            tracing::info!("{}: {}", decision, url);
        } else {
            tracing::trace!("{}: {}", decision, url);
        }
    }
}

impl<F> Crawler<F> {
    /// All recorded links
    ///
    /// With a link-type filter active this is that single collection;
    /// otherwise internal links followed by external links.
    pub fn links(&self) -> Vec<String> {
        if self.options.only_internal {
            self.links.get(LinkType::Internal).to_vec()
        } else if self.options.only_external {
            self.links.get(LinkType::External).to_vec()
        } else {
            self.links.all()
        }
    }

    /// Recorded internal links in discovery order
    ///
    /// Fails with `ConfigurationConflict` when the crawler is restricted to
    /// external links.
    pub fn internal_links(&self) -> Result<&[String], CrawlError> {
        if self.options.only_external {
            return Err(CrawlError::ConfigurationConflict(
                "internal links requested from a crawler restricted to external links"
                    .to_string(),
            ));
        }
        Ok(self.links.get(LinkType::Internal))
    }

    /// Recorded external links in discovery order
    ///
    /// Fails with `ConfigurationConflict` when the crawler is restricted to
    /// internal links.
    pub fn external_links(&self) -> Result<&[String], CrawlError> {
        if self.options.only_internal {
            return Err(CrawlError::ConfigurationConflict(
                "external links requested from a crawler restricted to internal links"
                    .to_string(),
            ));
        }
        Ok(self.links.get(LinkType::External))
    }

    /// The seed URL as supplied
    pub fn url(&self) -> &str {
        &self.seed.url
    }

    /// Configured maximum depth
    pub fn depth(&self) -> u32 {
        self.options.depth
    }

    pub fn scheme(&self) -> &str {
        &self.seed.scheme
    }

    pub fn host(&self) -> &str {
        &self.seed.host
    }

    pub fn options(&self) -> &CrawlOptions {
        &self.options
    }

    /// Number of pages entered during the last crawl
    pub fn pages_visited(&self) -> usize {
        self.visited.len()
    }

    /// The raw link collection, regardless of filters
    pub fn collection(&self) -> &LinkCollection {
        &self.links
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

/// Checks the seed URL and option combination before anything is built
fn validate_inputs(seed_url: &str, options: &CrawlOptions) -> Result<SeedUrl, CrawlError> {
    if !is_valid_url(seed_url) {
        return Err(CrawlError::InvalidInput(format!(
            "'{}' is not a valid absolute URL",
            seed_url
        )));
    }
    let seed = parse_seed(seed_url).map_err(|e| CrawlError::InvalidInput(e.to_string()))?;

    validate_filters(options).map_err(|e| match e {
        ConfigError::Conflict(message) => CrawlError::ConfigurationConflict(message),
        other => CrawlError::Config(other),
    })?;

    Ok(seed)
}
