//! URL handling module for Link-Crawler
//!
//! This module provides URL validation, seed parsing, href resolution and
//! internal/external link classification.

mod domain;
mod resolve;

pub use domain::{extract_host, is_valid_url, parse_seed, SeedUrl};
pub use resolve::resolve_href;

use crate::state::LinkType;

/// Classifies a resolved URL relative to the seed host
///
/// A URL is internal when its host equals `seed_host` (ports are ignored),
/// external otherwise. Hosts are compared lowercase.
///
/// # Examples
///
/// ```
/// use link_crawler::state::LinkType;
/// use link_crawler::url::classify;
///
/// assert_eq!(classify("https://example.com/a", "example.com"), LinkType::Internal);
/// assert_eq!(classify("https://blog.example.com/a", "example.com"), LinkType::External);
/// ```
pub fn classify(url: &str, seed_host: &str) -> LinkType {
    match extract_host(url) {
        Some(host) if host.eq_ignore_ascii_case(seed_host) => LinkType::Internal,
        _ => LinkType::External,
    }
}
