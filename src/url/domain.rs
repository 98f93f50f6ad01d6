use crate::{UrlError, UrlResult};
use url::Url;

/// Scheme, host and origin derived from a seed URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedUrl {
    /// The seed URL exactly as supplied
    pub url: String,
    /// Lowercase scheme, e.g. `https`
    pub scheme: String,
    /// Lowercase host without port, e.g. `example.com`
    pub host: String,
    /// `scheme://host[:port]`, the prefix used for relative hrefs
    pub origin: String,
}

/// Returns true if `s` parses as an absolute URL with a host
///
/// # Examples
///
/// ```
/// use link_crawler::url::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/about"));
/// assert!(!is_valid_url("/about"));
/// assert!(!is_valid_url("mailto:someone@example.com"));
/// ```
pub fn is_valid_url(s: &str) -> bool {
    Url::parse(s)
        .map(|url| url.host_str().is_some_and(|host| !host.is_empty()))
        .unwrap_or(false)
}

/// Extracts the lowercase host from a URL string
///
/// Returns `None` for strings that do not parse or carry no host. The port is
/// not part of the host.
///
/// ```
/// use link_crawler::url::extract_host;
///
/// assert_eq!(extract_host("https://EXAMPLE.com:8080/x"), Some("example.com".to_string()));
/// assert_eq!(extract_host("not a url"), None);
/// ```
pub fn extract_host(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()?
        .host_str()
        .filter(|host| !host.is_empty())
        .map(|host| host.to_lowercase())
}

/// Parses a seed URL into its scheme, host and origin
pub fn parse_seed(seed: &str) -> UrlResult<SeedUrl> {
    let url = Url::parse(seed).map_err(|e| UrlError::Parse(format!("{}: {}", seed, e)))?;

    let host = url
        .host_str()
        .filter(|host| !host.is_empty())
        .map(|host| host.to_lowercase())
        .ok_or_else(|| UrlError::MissingHost(seed.to_string()))?;

    let scheme = url.scheme().to_lowercase();
    let origin = match url.port() {
        Some(port) => format!("{}://{}:{}", scheme, host, port),
        None => format!("{}://{}", scheme, host),
    };

    Ok(SeedUrl {
        url: seed.to_string(),
        scheme,
        host,
        origin,
    })
}
