/// Resolves an anchor href against the seed origin
///
/// The rule is deliberately simple and string based:
///
/// - hrefs beginning with `http` are taken as absolute and returned as-is
/// - anything else is appended to `origin`, with a `/` inserted only when the
///   href does not already start with one
///
/// `../`, protocol-relative (`//host/x`), query-only and fragment-only hrefs
/// are not resolved the RFC 3986 way; they are prefixed like any other path.
/// Surrounding whitespace is stripped first, as browsers do for href values.
///
/// # Examples
///
/// ```
/// use link_crawler::url::resolve_href;
///
/// assert_eq!(resolve_href("/about", "http://example.com"), "http://example.com/about");
/// assert_eq!(resolve_href("about", "http://example.com"), "http://example.com/about");
/// assert_eq!(resolve_href("https://other.org/x", "http://example.com"), "https://other.org/x");
/// ```
pub fn resolve_href(href: &str, origin: &str) -> String {
    let href = href.trim();

    if href.starts_with("http") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{}{}", origin, href)
    } else {
        format!("{}/{}", origin, href)
    }
}
