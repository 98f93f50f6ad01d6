//! Markdown summary generation
//!
//! This module generates human-readable markdown summaries of crawl results:
//! run information, totals, the internal and external link lists and the
//! external hosts they point at.

use crate::output::CrawlSummary;
use crate::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown summary of `summary` to `output_path`
///
/// I/O failures surface as `CrawlError::Io`.
pub fn generate_markdown_summary(summary: &CrawlSummary, output_path: &Path) -> Result<()> {
    let markdown = format_markdown_summary(summary);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl summary as markdown
pub fn format_markdown_summary(summary: &CrawlSummary) -> String {
    let mut md = String::new();

    md.push_str("# Link-Crawler Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Seed URL**: {}\n", summary.seed_url));
    md.push_str(&format!("- **Depth**: {}\n", summary.depth));
    md.push_str(&format!("- **Filter**: {}\n", summary.filter));
    md.push_str(&format!(
        "- **Existence Check**: {}\n",
        if summary.check_url_exists { "enabled" } else { "disabled" }
    ));
    md.push_str(&format!(
        "- **Started**: {}\n",
        summary.started_at.to_rfc3339()
    ));
    md.push_str(&format!(
        "- **Finished**: {}\n",
        summary.finished_at.to_rfc3339()
    ));
    md.push_str(&format!(
        "- **Duration**: {} seconds\n",
        summary.duration_seconds()
    ));
    if let Some(hash) = &summary.config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    // Overall statistics
    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!("- **Pages Visited**: {}\n", summary.pages_visited));
    md.push_str(&format!("- **Total Links**: {}\n", summary.total_links()));
    if !summary.only_external {
        md.push_str(&format!(
            "- **Internal Links**: {}\n",
            summary.internal_links.len()
        ));
    }
    if !summary.only_internal {
        md.push_str(&format!(
            "- **External Links**: {}\n",
            summary.external_links.len()
        ));
    }
    md.push('\n');

    if !summary.only_external {
        push_link_section(&mut md, "Internal Links", &summary.internal_links);
    }

    if !summary.only_internal {
        push_link_section(&mut md, "External Links", &summary.external_links);

        let hosts = summary.external_hosts();
        if !hosts.is_empty() {
            md.push_str("## External Hosts\n\n");
            md.push_str(&format!("Total: {}\n\n", hosts.len()));
            for host in &hosts {
                md.push_str(&format!("- {}\n", host));
            }
            md.push('\n');
        }
    }

    md
}

fn push_link_section(md: &mut String, title: &str, links: &[String]) {
    md.push_str(&format!("## {}\n\n", title));
    if links.is_empty() {
        md.push_str("_None found._\n\n");
        return;
    }

    md.push_str("| # | URL |\n");
    md.push_str("|---|-----|\n");
    for (i, link) in links.iter().enumerate() {
        md.push_str(&format!("| {} | {} |\n", i + 1, link));
    }
    md.push('\n');
}
