// Ranked views and aggregates over the engagement indexes.
//
// Every report is read-only and recomputed on demand; nothing here mutates
// the engine, so reports can run in any order and repeat idempotently.
// Sorts are stable and descending on a single key, which means ties keep
// the enumeration order of the underlying structure — ascending id for the
// trees, registry iteration order for platforms.

use std::collections::HashMap;

use serde::Serialize;

use crate::analytics::engine::EngagementEngine;
use crate::engagement::entities::{Content, ContentKind, Platform, User};

/// Flattened content row for display and serialization.
#[derive(Debug, Clone, Serialize)]
pub struct ContentSummary {
    pub id: u64,
    pub name: String,
    pub kind: Option<ContentKind>,
    pub total_interactions: u64,
    pub watch_seconds: f64,
    pub average_watch_seconds: f64,
    pub engagement_total: u64,
    pub comment_count: u64,
}

impl ContentSummary {
    fn from_content(content: &Content) -> Self {
        Self {
            id: content.id,
            name: content.name.clone(),
            kind: content.kind,
            total_interactions: content.total_interactions(),
            watch_seconds: content.watch_seconds(),
            average_watch_seconds: content.average_watch_seconds(),
            engagement_total: content.engagement_total(),
            comment_count: content.comment_count(),
        }
    }
}

/// Flattened user row.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: u64,
    pub total_interactions: u64,
    pub watch_seconds: f64,
    pub engagement_total: u64,
}

impl UserSummary {
    fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            total_interactions: user.total_interactions(),
            watch_seconds: user.watch_seconds(),
            engagement_total: user.engagement_total(),
        }
    }
}

/// Flattened platform row.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformSummary {
    pub name: String,
    pub total_interactions: u64,
    pub watch_seconds: f64,
    pub average_watch_seconds: f64,
    pub engagement_total: u64,
}

impl PlatformSummary {
    fn from_platform(platform: &Platform) -> Self {
        Self {
            name: platform.name.clone(),
            total_interactions: platform.total_interactions(),
            watch_seconds: platform.watch_seconds(),
            average_watch_seconds: platform.average_watch_seconds(),
            engagement_total: platform.engagement_total(),
        }
    }
}

/// Content ranked by cumulative watch time.
pub fn top_content_by_watch_time(
    engine: &EngagementEngine,
    top: Option<usize>,
) -> Vec<ContentSummary> {
    let mut rows: Vec<ContentSummary> = engine
        .contents()
        .into_iter()
        .map(ContentSummary::from_content)
        .collect();
    rows.sort_by(|a, b| {
        b.watch_seconds
            .partial_cmp(&a.watch_seconds)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    take_top(rows, top)
}

/// Content ranked by total interaction count.
pub fn top_content_by_interactions(
    engine: &EngagementEngine,
    top: Option<usize>,
) -> Vec<ContentSummary> {
    let mut rows: Vec<ContentSummary> = engine
        .contents()
        .into_iter()
        .map(ContentSummary::from_content)
        .collect();
    rows.sort_by(|a, b| b.total_interactions.cmp(&a.total_interactions));
    take_top(rows, top)
}

/// Content ranked by comment count.
pub fn top_content_by_comments(
    engine: &EngagementEngine,
    top: Option<usize>,
) -> Vec<ContentSummary> {
    let mut rows: Vec<ContentSummary> = engine
        .contents()
        .into_iter()
        .map(ContentSummary::from_content)
        .collect();
    rows.sort_by(|a, b| b.comment_count.cmp(&a.comment_count));
    take_top(rows, top)
}

/// Users ranked by total interaction count.
pub fn top_users_by_interactions(
    engine: &EngagementEngine,
    top: Option<usize>,
) -> Vec<UserSummary> {
    let mut rows: Vec<UserSummary> = engine.users().into_iter().map(UserSummary::from_user).collect();
    rows.sort_by(|a, b| b.total_interactions.cmp(&a.total_interactions));
    take_top(rows, top)
}

/// Users ranked by cumulative watch time.
pub fn top_users_by_watch_time(engine: &EngagementEngine, top: Option<usize>) -> Vec<UserSummary> {
    let mut rows: Vec<UserSummary> = engine.users().into_iter().map(UserSummary::from_user).collect();
    rows.sort_by(|a, b| {
        b.watch_seconds
            .partial_cmp(&a.watch_seconds)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    take_top(rows, top)
}

/// Platforms ranked by cumulative watch time.
pub fn top_platforms_by_watch_time(
    engine: &EngagementEngine,
    top: Option<usize>,
) -> Vec<PlatformSummary> {
    let mut rows: Vec<PlatformSummary> = engine
        .platforms()
        .map(PlatformSummary::from_platform)
        .collect();
    rows.sort_by(|a, b| {
        b.watch_seconds
            .partial_cmp(&a.watch_seconds)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    take_top(rows, top)
}

/// Platforms ranked by engagement total (likes + shares + comments).
pub fn top_platforms_by_engagement(
    engine: &EngagementEngine,
    top: Option<usize>,
) -> Vec<PlatformSummary> {
    let mut rows: Vec<PlatformSummary> = engine
        .platforms()
        .map(PlatformSummary::from_platform)
        .collect();
    rows.sort_by(|a, b| b.engagement_total.cmp(&a.engagement_total));
    take_top(rows, top)
}

/// Mean watch time per view session for every platform, 0.0 for platforms
/// that registered no views.
pub fn platform_average_watch_time(engine: &EngagementEngine) -> HashMap<String, f64> {
    engine
        .platforms()
        .map(|p| (p.name.clone(), p.average_watch_seconds()))
        .collect()
}

/// Comment count per content, keyed by content name.
pub fn content_comment_counts(engine: &EngagementEngine) -> HashMap<String, u64> {
    engine
        .contents()
        .into_iter()
        .map(|c| (c.name.clone(), c.comment_count()))
        .collect()
}

/// Truncate to the first `top` rows; `None` keeps the full sequence.
fn take_top<T>(mut rows: Vec<T>, top: Option<usize>) -> Vec<T> {
    if let Some(n) = top {
        rows.truncate(n);
    }
    rows
}
