use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use engauge::analytics::engine::EngagementEngine;
use engauge::analytics::reports;
use engauge::config::Config;
use engauge::{ingest, output};

/// Engauge: engagement analytics for media interaction streams.
///
/// Ingests a CSV of user-content-platform interactions, builds per-entity
/// engagement indexes, and derives ranked reports: top content by watch
/// time, most active users, platform aggregates, comment breakdowns.
#[derive(Parser)]
#[command(name = "engauge", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full engagement report (all rankings plus platform aggregates)
    Report {
        /// CSV interaction export (falls back to ENGAUGE_DATA_PATH)
        file: Option<String>,
        /// Rows per ranking (0 = no limit)
        #[arg(long)]
        top: Option<usize>,
        /// Also write the markdown report file
        #[arg(long)]
        markdown: bool,
        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Rank content by watch time, interactions, or comments
    Content {
        file: Option<String>,
        /// Ranking key: time | interactions | comments
        #[arg(long, default_value = "time")]
        by: String,
        /// Rows to show (0 = no limit)
        #[arg(long)]
        top: Option<usize>,
        #[arg(long)]
        json: bool,
    },

    /// Rank users by interactions or watch time
    Users {
        file: Option<String>,
        /// Ranking key: interactions | time
        #[arg(long, default_value = "interactions")]
        by: String,
        /// Rows to show (0 = no limit)
        #[arg(long)]
        top: Option<usize>,
        #[arg(long)]
        json: bool,
    },

    /// Rank platforms and show per-platform watch-time averages
    Platforms {
        file: Option<String>,
        /// Rows to show (0 = no limit)
        #[arg(long)]
        top: Option<usize>,
        #[arg(long)]
        json: bool,
    },

    /// List the comments recorded for one content id
    Comments {
        file: Option<String>,
        /// The content id to inspect
        #[arg(long)]
        content_id: u64,
    },

    /// Load a CSV and show what the indexes hold
    Inspect {
        file: Option<String>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("engauge=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Commands::Report {
            file,
            top,
            markdown,
            json,
        } => {
            let (engine, _, _) = build_engine(&config, file)?;
            let top = effective_top(top, &config);

            let content = reports::top_content_by_watch_time(&engine, top);
            let users = reports::top_users_by_interactions(&engine, top);
            let platforms = reports::top_platforms_by_watch_time(&engine, top);
            let averages = sorted_by_value_desc(reports::platform_average_watch_time(&engine));
            let comment_counts = sorted_by_count_desc(reports::content_comment_counts(&engine));

            if json {
                let payload = serde_json::json!({
                    "top_content_by_watch_time": content,
                    "top_users_by_interactions": users,
                    "top_platforms_by_watch_time": platforms,
                    "platform_average_watch_seconds": averages,
                    "content_comment_counts": comment_counts,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                output::terminal::display_content_ranking("Top Content by Watch Time", &content);
                output::terminal::display_user_ranking("Most Active Users", &users);
                output::terminal::display_platform_ranking("Platforms by Watch Time", &platforms);
                output::terminal::display_platform_averages(&averages);
                output::terminal::display_comment_counts(&comment_counts);
            }

            if markdown {
                let path = output::markdown::generate_report(
                    &content,
                    &users,
                    &platforms,
                    &averages,
                    &comment_counts,
                    &config.report_path,
                )?;
                println!("\n{}", format!("Markdown report saved to: {path}").bold());
            }
        }

        Commands::Content { file, by, top, json } => {
            let (engine, _, _) = build_engine(&config, file)?;
            let top = effective_top(top, &config);

            let (title, rows) = match by.as_str() {
                "time" => (
                    "Top Content by Watch Time",
                    reports::top_content_by_watch_time(&engine, top),
                ),
                "interactions" => (
                    "Top Content by Interactions",
                    reports::top_content_by_interactions(&engine, top),
                ),
                "comments" => (
                    "Top Content by Comments",
                    reports::top_content_by_comments(&engine, top),
                ),
                other => anyhow::bail!(
                    "Unknown ranking key '{other}'. Use: time, interactions, or comments."
                ),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                output::terminal::display_content_ranking(title, &rows);
            }
        }

        Commands::Users { file, by, top, json } => {
            let (engine, _, _) = build_engine(&config, file)?;
            let top = effective_top(top, &config);

            let (title, rows) = match by.as_str() {
                "interactions" => (
                    "Most Active Users",
                    reports::top_users_by_interactions(&engine, top),
                ),
                "time" => (
                    "Top Users by Watch Time",
                    reports::top_users_by_watch_time(&engine, top),
                ),
                other => anyhow::bail!("Unknown ranking key '{other}'. Use: interactions or time."),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                output::terminal::display_user_ranking(title, &rows);
            }
        }

        Commands::Platforms { file, top, json } => {
            let (engine, _, _) = build_engine(&config, file)?;
            let top = effective_top(top, &config);

            let by_watch = reports::top_platforms_by_watch_time(&engine, top);
            let by_engagement = reports::top_platforms_by_engagement(&engine, top);
            let averages = sorted_by_value_desc(reports::platform_average_watch_time(&engine));

            if json {
                let payload = serde_json::json!({
                    "by_watch_time": by_watch,
                    "by_engagement": by_engagement,
                    "average_watch_seconds": averages,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                output::terminal::display_platform_ranking("Platforms by Watch Time", &by_watch);
                output::terminal::display_platform_ranking(
                    "Platforms by Engagement",
                    &by_engagement,
                );
                output::terminal::display_platform_averages(&averages);
            }
        }

        Commands::Comments { file, content_id } => {
            let (engine, _, _) = build_engine(&config, file)?;

            match engine.content(content_id) {
                Some(content) => {
                    let comments = content.list_comments();
                    output::terminal::display_comments(&content.name, &comments);
                }
                None => {
                    println!("No content with id {content_id} in the index.");
                }
            }
        }

        Commands::Inspect { file } => {
            let (engine, rows, registered) = build_engine(&config, file)?;
            output::terminal::display_overview(
                rows,
                registered,
                engine.content_count(),
                engine.user_count(),
                engine.platform_count(),
            );
        }
    }

    Ok(())
}

/// Load the CSV, drain the staging queue through the engine, and return
/// (engine, rows loaded, interactions registered).
fn build_engine(
    config: &Config,
    file: Option<String>,
) -> Result<(EngagementEngine, usize, usize)> {
    let path = config.resolve_data_path(file)?;

    let mut engine = EngagementEngine::new();
    let rows = ingest::load_csv(&mut engine, Path::new(&path))?;
    let registered = engine.process();

    info!(
        rows,
        registered,
        contents = engine.content_count(),
        users = engine.user_count(),
        platforms = engine.platform_count(),
        "processing pass complete"
    );

    Ok((engine, rows, registered))
}

/// Resolve the effective ranking truncation: an explicit 0 means no limit,
/// absence falls back to the configured default.
fn effective_top(arg: Option<usize>, config: &Config) -> Option<usize> {
    match arg {
        Some(0) => None,
        Some(n) => Some(n),
        None => Some(config.top_n),
    }
}

/// Order a name -> average map for display, highest average first; ties
/// fall back to name order so output is reproducible.
fn sorted_by_value_desc(map: std::collections::HashMap<String, f64>) -> Vec<(String, f64)> {
    let mut rows: Vec<(String, f64)> = map.into_iter().collect();
    rows.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    rows
}

/// Order a name -> count map for display, highest count first.
fn sorted_by_count_desc(map: std::collections::HashMap<String, u64>) -> Vec<(String, u64)> {
    let mut rows: Vec<(String, u64)> = map.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}
