//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building HTTP clients with the configured user agent and timeouts
//! - GET requests to fetch page content
//! - HEAD requests to probe whether a URL exists
//! - Error classification

use crate::config::HttpConfig;
use crate::FetchError;
use reqwest::{redirect::Policy, Client};
use std::future::Future;
use std::time::Duration;

/// Source of page bodies and existence probes
///
/// The crawler only talks to the network through this trait, which keeps the
/// traversal logic independent of the HTTP stack. Implementations may use
/// `async fn`; the returned futures must be `Send`.
pub trait PageFetcher {
    /// Fetches the body of `url`
    ///
    /// Non-success statuses are errors.
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;

    /// Issues a lightweight request for `url`, following redirects, and
    /// returns the final status code
    fn probe(&self, url: &str) -> impl Future<Output = Result<u16, FetchError>> + Send;
}

/// `PageFetcher` backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a client built from `config`
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Wraps an already configured client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    async fn probe(&self, url: &str) -> Result<u16, FetchError> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        Ok(response.status().as_u16())
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```
/// use link_crawler::config::HttpConfig;
/// use link_crawler::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
