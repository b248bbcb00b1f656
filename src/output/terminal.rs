// Colored terminal output for engagement rankings and aggregates.
//
// This module handles all terminal-specific formatting: colors, tables,
// rank markers. The main.rs subcommands delegate here; an empty result
// sequence is a normal displayable outcome, not an error.

use colored::Colorize;

use crate::analytics::reports::{ContentSummary, PlatformSummary, UserSummary};
use crate::output::{format_seconds, truncate_chars};

/// Display a ranked content table under `title`.
pub fn display_content_ranking(title: &str, rows: &[ContentSummary]) {
    println!("\n{}", format!("=== {title} ===").bold());

    if rows.is_empty() {
        println!("  No content indexed yet.");
        return;
    }

    println!(
        "  {:>4}  {:<32} {:>10}  {:>8}  {:>6}  {:>8}",
        "Rank".dimmed(),
        "Content".dimmed(),
        "Watch".dimmed(),
        "Inter".dimmed(),
        "Engmt".dimmed(),
        "Comments".dimmed(),
    );
    println!("  {}", "-".repeat(76).dimmed());

    for (i, row) in rows.iter().enumerate() {
        let name = match row.kind {
            Some(kind) => format!("{} [{}]", truncate_chars(&row.name, 24), kind),
            None => truncate_chars(&row.name, 30),
        };
        println!(
            "  {:>4}. {:<32} {:>10}  {:>8}  {:>6}  {:>8}",
            i + 1,
            name,
            format_seconds(row.watch_seconds),
            row.total_interactions,
            row.engagement_total,
            row.comment_count,
        );
    }
}

/// Display a ranked user table under `title`.
pub fn display_user_ranking(title: &str, rows: &[UserSummary]) {
    println!("\n{}", format!("=== {title} ===").bold());

    if rows.is_empty() {
        println!("  No users indexed yet.");
        return;
    }

    println!(
        "  {:>4}  {:<16} {:>8}  {:>10}  {:>6}",
        "Rank".dimmed(),
        "User".dimmed(),
        "Inter".dimmed(),
        "Watch".dimmed(),
        "Engmt".dimmed(),
    );
    println!("  {}", "-".repeat(52).dimmed());

    for (i, row) in rows.iter().enumerate() {
        println!(
            "  {:>4}. {:<16} {:>8}  {:>10}  {:>6}",
            i + 1,
            format!("user {}", row.id),
            row.total_interactions,
            format_seconds(row.watch_seconds),
            row.engagement_total,
        );
    }
}

/// Display a ranked platform table under `title`.
pub fn display_platform_ranking(title: &str, rows: &[PlatformSummary]) {
    println!("\n{}", format!("=== {title} ===").bold());

    if rows.is_empty() {
        println!("  No platforms registered yet.");
        return;
    }

    println!(
        "  {:>4}  {:<24} {:>10}  {:>10}  {:>8}  {:>6}",
        "Rank".dimmed(),
        "Platform".dimmed(),
        "Watch".dimmed(),
        "Avg/view".dimmed(),
        "Inter".dimmed(),
        "Engmt".dimmed(),
    );
    println!("  {}", "-".repeat(70).dimmed());

    for (i, row) in rows.iter().enumerate() {
        println!(
            "  {:>4}. {:<24} {:>10}  {:>10}  {:>8}  {:>6}",
            i + 1,
            truncate_chars(&row.name, 22),
            format_seconds(row.watch_seconds),
            format_seconds(row.average_watch_seconds),
            row.total_interactions,
            row.engagement_total,
        );
    }
}

/// Display per-platform average watch time, highest first.
pub fn display_platform_averages(averages: &[(String, f64)]) {
    println!("\n{}", "=== Average Watch Time per Platform ===".bold());

    if averages.is_empty() {
        println!("  No platforms registered yet.");
        return;
    }

    for (name, avg) in averages {
        let value = if *avg > 0.0 {
            format_seconds(*avg).normal()
        } else {
            "no views".dimmed()
        };
        println!("  {:<24} {}", name, value);
    }
}

/// Display per-content comment counts, highest first.
pub fn display_comment_counts(counts: &[(String, u64)]) {
    println!("\n{}", "=== Comments per Content ===".bold());

    if counts.is_empty() {
        println!("  No content indexed yet.");
        return;
    }

    for (name, count) in counts {
        println!("  {:<32} {:>6}", truncate_chars(name, 30), count);
    }
}

/// Display the comments recorded for one content entity.
pub fn display_comments(content_name: &str, comments: &[String]) {
    println!(
        "\n{}",
        format!("=== Comments on {content_name} ({}) ===", comments.len()).bold()
    );

    if comments.is_empty() {
        println!("  No comments recorded.");
        return;
    }

    for comment in comments {
        println!("  \"{}\"", truncate_chars(comment, 120).dimmed());
    }
}

/// Display what the indexes hold after a processing pass.
pub fn display_overview(
    rows_loaded: usize,
    registered: usize,
    content_count: usize,
    user_count: usize,
    platform_count: usize,
) {
    println!("\n{}", "=== Index Overview ===".bold());
    println!("  Rows loaded:             {rows_loaded}");
    println!("  Interactions registered: {registered}");
    if registered < rows_loaded {
        println!(
            "  {} {} malformed rows dropped",
            "~".yellow(),
            rows_loaded - registered
        );
    }
    println!("  Content entities:        {content_count}");
    println!("  Users:                   {user_count}");
    println!("  Platforms:               {platform_count}");
}
