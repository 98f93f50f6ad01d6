//! Crawler module for page fetching and link traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching and existence probes
//! - HTML parsing and anchor extraction
//! - Depth-bounded traversal and link recording

mod fetcher;
mod parser;
mod traversal;

pub use fetcher::{build_http_client, HttpFetcher, PageFetcher};
pub use parser::{extract_hrefs, parse_html, ParsedPage};
pub use traversal::Crawler;
