use crate::output::CrawlSummary;

/// Formats the discovered links as plain text, one URL per line
///
/// Internal links come first, then external links; a section is omitted when
/// the crawl was restricted to the other link type.
pub fn format_links(summary: &CrawlSummary) -> String {
    let mut out = String::new();

    if !summary.only_external {
        push_section(&mut out, "Internal links", &summary.internal_links);
    }
    if !summary.only_internal {
        push_section(&mut out, "External links", &summary.external_links);
    }

    out.push_str(&format!(
        "{} links from {} pages in {}s\n",
        summary.total_links(),
        summary.pages_visited,
        summary.duration_seconds()
    ));
    out
}

/// Prints the discovered links to stdout
pub fn print_links(summary: &CrawlSummary) {
    print!("{}", format_links(summary));
}

fn push_section(out: &mut String, title: &str, links: &[String]) {
    out.push_str(&format!("{} ({}):\n", title, links.len()));
    for link in links {
        out.push_str(&format!("  {}\n", link));
    }
    out.push('\n');
}
