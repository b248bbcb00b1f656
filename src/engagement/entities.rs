// The three indexed entities: content, users, and platforms.
//
// All three share the same shape — an identity plus an embedded engagement
// log. Content additionally carries a display name and a kind label;
// video, podcast, and article distinguish nothing behaviorally, so the
// kind is a discriminator field rather than a type hierarchy.

use std::collections::HashMap;

use serde::Serialize;

use crate::engagement::interaction::InteractionRef;
use crate::engagement::metrics::EngagementLog;

/// Content kind discriminator. Carries no state or behavior of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Video,
    Podcast,
    Article,
}

impl ContentKind {
    /// Parse a source label. Unknown labels yield `None`; the content is
    /// still indexed, just without a kind.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "video" => Some(ContentKind::Video),
            "podcast" => Some(ContentKind::Podcast),
            "article" | "artigo" => Some(ContentKind::Article),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Video => "video",
            ContentKind::Podcast => "podcast",
            ContentKind::Article => "article",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A piece of content, keyed by integer id in the content index.
#[derive(Debug, Clone)]
pub struct Content {
    pub id: u64,
    pub name: String,
    pub kind: Option<ContentKind>,
    log: EngagementLog,
}

impl Content {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: None,
            log: EngagementLog::new(),
        }
    }

    pub fn with_kind(mut self, kind: Option<ContentKind>) -> Self {
        self.kind = kind;
        self
    }

    /// Attach one interaction and update the running metrics. O(1).
    pub fn register_interaction(&mut self, interaction: InteractionRef) {
        self.log.register(interaction);
    }

    pub fn log(&self) -> &EngagementLog {
        &self.log
    }

    pub fn total_interactions(&self) -> u64 {
        self.log.total()
    }

    pub fn watch_seconds(&self) -> f64 {
        self.log.watch_seconds()
    }

    pub fn engagement_total(&self) -> u64 {
        self.log.engagement_total()
    }

    pub fn counts_by_type(&self) -> HashMap<String, u64> {
        self.log.counts_by_type()
    }

    /// Mean watch time per view session, 0.0 when this content was never
    /// viewed.
    pub fn average_watch_seconds(&self) -> f64 {
        self.log.average_watch_seconds()
    }

    /// The comment texts left on this content, in registration order.
    pub fn list_comments(&self) -> Vec<String> {
        self.log.comments()
    }

    pub fn comment_count(&self) -> u64 {
        self.log.comment_count()
    }
}

/// A user, keyed by integer id in the user index.
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    log: EngagementLog,
}

impl User {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            log: EngagementLog::new(),
        }
    }

    pub fn register_interaction(&mut self, interaction: InteractionRef) {
        self.log.register(interaction);
    }

    pub fn log(&self) -> &EngagementLog {
        &self.log
    }

    pub fn total_interactions(&self) -> u64 {
        self.log.total()
    }

    pub fn watch_seconds(&self) -> f64 {
        self.log.watch_seconds()
    }

    pub fn engagement_total(&self) -> u64 {
        self.log.engagement_total()
    }

    pub fn counts_by_type(&self) -> HashMap<String, u64> {
        self.log.counts_by_type()
    }
}

/// A media platform, keyed by name in the platform registry.
#[derive(Debug, Clone)]
pub struct Platform {
    pub name: String,
    log: EngagementLog,
}

impl Platform {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            log: EngagementLog::new(),
        }
    }

    pub fn register_interaction(&mut self, interaction: InteractionRef) {
        self.log.register(interaction);
    }

    pub fn log(&self) -> &EngagementLog {
        &self.log
    }

    pub fn total_interactions(&self) -> u64 {
        self.log.total()
    }

    pub fn watch_seconds(&self) -> f64 {
        self.log.watch_seconds()
    }

    pub fn engagement_total(&self) -> u64 {
        self.log.engagement_total()
    }

    pub fn counts_by_type(&self) -> HashMap<String, u64> {
        self.log.counts_by_type()
    }

    /// Mean watch time per view session on this platform, 0.0 when no
    /// views were registered.
    pub fn average_watch_seconds(&self) -> f64 {
        self.log.average_watch_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_kind_parse() {
        assert_eq!(ContentKind::parse("video"), Some(ContentKind::Video));
        assert_eq!(ContentKind::parse(" Podcast "), Some(ContentKind::Podcast));
        assert_eq!(ContentKind::parse("artigo"), Some(ContentKind::Article));
        assert_eq!(ContentKind::parse("livestream"), None);
        assert_eq!(ContentKind::parse(""), None);
    }

    #[test]
    fn test_content_starts_empty() {
        let content = Content::new(7, "content_7");
        assert_eq!(content.total_interactions(), 0);
        assert_eq!(content.watch_seconds(), 0.0);
        assert_eq!(content.average_watch_seconds(), 0.0);
        assert!(content.list_comments().is_empty());
        assert!(content.kind.is_none());
    }
}
