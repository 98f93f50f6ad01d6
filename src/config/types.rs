use serde::Deserialize;
use std::collections::HashSet;

/// Default maximum recursion depth from the seed page
pub const DEFAULT_DEPTH: u32 = 5;

/// Main configuration structure for Link-Crawler
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Seed URL; may also be given on the command line
    #[serde(rename = "seed-url", default)]
    pub seed_url: Option<String>,

    #[serde(default)]
    pub crawl: CrawlOptions,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawl behavior options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlOptions {
    /// Probe each discovered link and only record it when the probe succeeds
    pub check_url_exists: bool,

    /// Maximum recursion depth from the seed page
    pub depth: u32,

    /// Record and report internal links only
    pub only_internal: bool,

    /// Record and report external links only
    pub only_external: bool,

    /// Exact URLs that are never visited nor recorded
    pub ignore_links: HashSet<String>,

    /// Emit the skip/found decision trace at info level
    pub debug: bool,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            check_url_exists: true,
            depth: DEFAULT_DEPTH,
            only_internal: false,
            only_external: false,
            ignore_links: HashSet::new(),
            debug: false,
        }
    }
}

impl CrawlOptions {
    pub fn with_check_url_exists(mut self, check: bool) -> Self {
        self.check_url_exists = check;
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_only_internal(mut self, only: bool) -> Self {
        self.only_internal = only;
        self
    }

    pub fn with_only_external(mut self, only: bool) -> Self {
        self.only_external = only;
        self
    }

    pub fn with_ignore_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_links.extend(links.into_iter().map(Into::into));
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Returns true when both link-type filters are enabled
    pub fn has_conflicting_filters(&self) -> bool {
        self.only_internal && self.only_external
    }

    /// Human readable name of the active link-type filter
    pub fn filter_label(&self) -> &'static str {
        match (self.only_internal, self.only_external) {
            (true, false) => "internal only",
            (false, true) => "external only",
            _ => "all links",
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Total request timeout (seconds)
    pub timeout_secs: u64,

    /// Connection timeout (seconds)
    pub connect_timeout_secs: u64,

    /// Maximum redirect hops followed by GET and HEAD requests
    pub max_redirects: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("link-crawler/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_redirects: 10,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Path to the markdown summary file
    #[serde(rename = "summary-path", default)]
    pub summary_path: Option<String>,
}
