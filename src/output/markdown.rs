// Markdown report generation — the full engagement summary written to disk.
//
// Mirrors the terminal report in a shareable form: ranked tables for
// content, users, and platforms, plus the per-platform averages and
// per-content comment counts.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use crate::analytics::reports::{ContentSummary, PlatformSummary, UserSummary};
use crate::output::format_seconds;

/// Write the engagement report to `path`, creating parent directories as
/// needed. Returns the path written.
pub fn generate_report(
    content: &[ContentSummary],
    users: &[UserSummary],
    platforms: &[PlatformSummary],
    averages: &[(String, f64)],
    comment_counts: &[(String, u64)],
    path: &str,
) -> Result<String> {
    let mut report = String::new();

    report.push_str("# Engagement Report\n\n");
    report.push_str(&format!(
        "Generated: {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    report.push_str("## Top Content by Watch Time\n\n");
    if content.is_empty() {
        report.push_str("No content indexed.\n\n");
    } else {
        report.push_str("| # | Content | Kind | Watch time | Interactions | Engagement | Comments |\n");
        report.push_str("|---|---------|------|------------|--------------|------------|----------|\n");
        for (i, row) in content.iter().enumerate() {
            report.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                i + 1,
                row.name,
                row.kind.map(|k| k.as_str()).unwrap_or("-"),
                format_seconds(row.watch_seconds),
                row.total_interactions,
                row.engagement_total,
                row.comment_count,
            ));
        }
        report.push('\n');
    }

    report.push_str("## Most Active Users\n\n");
    if users.is_empty() {
        report.push_str("No users indexed.\n\n");
    } else {
        report.push_str("| # | User | Interactions | Watch time | Engagement |\n");
        report.push_str("|---|------|--------------|------------|------------|\n");
        for (i, row) in users.iter().enumerate() {
            report.push_str(&format!(
                "| {} | user {} | {} | {} | {} |\n",
                i + 1,
                row.id,
                row.total_interactions,
                format_seconds(row.watch_seconds),
                row.engagement_total,
            ));
        }
        report.push('\n');
    }

    report.push_str("## Platforms by Watch Time\n\n");
    if platforms.is_empty() {
        report.push_str("No platforms registered.\n\n");
    } else {
        report.push_str("| # | Platform | Watch time | Avg per view | Interactions | Engagement |\n");
        report.push_str("|---|----------|------------|--------------|--------------|------------|\n");
        for (i, row) in platforms.iter().enumerate() {
            report.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                i + 1,
                row.name,
                format_seconds(row.watch_seconds),
                format_seconds(row.average_watch_seconds),
                row.total_interactions,
                row.engagement_total,
            ));
        }
        report.push('\n');
    }

    if !averages.is_empty() {
        report.push_str("## Average Watch Time per Platform\n\n");
        for (name, avg) in averages {
            if *avg > 0.0 {
                report.push_str(&format!("- {}: {}\n", name, format_seconds(*avg)));
            } else {
                report.push_str(&format!("- {}: no views\n", name));
            }
        }
        report.push('\n');
    }

    if !comment_counts.is_empty() {
        report.push_str("## Comments per Content\n\n");
        for (name, count) in comment_counts {
            report.push_str(&format!("- {}: {}\n", name, count));
        }
        report.push('\n');
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
    }
    fs::write(path, report).with_context(|| format!("writing report to {path}"))?;

    Ok(path.to_string())
}
