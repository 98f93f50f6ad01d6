//! HTML parser for extracting anchors
//!
//! Pages are parsed with `scraper`; the crawler only needs the raw `href`
//! value of every `<a>` element (in document order) plus the title for
//! diagnostics. Resolution of the hrefs happens in the crawler.

use scraper::{Html, Selector};

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// The page title (from <title> tag)
    pub title: Option<String>,

    /// Raw href values of all anchors, in document order
    pub hrefs: Vec<String>,
}

/// Parses HTML content and extracts anchor hrefs and the title
///
/// Malformed markup never fails: the HTML5 parser recovers and whatever
/// anchors it finds are returned.
///
/// # Example
///
/// ```
/// use link_crawler::crawler::parse_html;
///
/// let html = r#"<html><head><title>Test</title></head>
///     <body><a href="/page">Link</a></body></html>"#;
/// let parsed = parse_html(html);
/// assert_eq!(parsed.title, Some("Test".to_string()));
/// assert_eq!(parsed.hrefs, vec!["/page".to_string()]);
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        hrefs: extract_anchor_hrefs(&document),
    }
}

/// Convenience function for extracting just the hrefs from HTML
pub fn extract_hrefs(html: &str) -> Vec<String> {
    parse_html(html).hrefs
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn extract_anchor_hrefs(document: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
