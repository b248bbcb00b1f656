// Per-entity interaction log with incrementally maintained totals.
//
// Content, users, and platforms all accumulate the same numbers: the
// interactions they participated in, a total count, and cumulative watch
// time. The running totals are maintained only by `register`; the derived
// queries recount from the log on demand instead of caching.

use std::collections::HashMap;

use crate::engagement::interaction::InteractionRef;

/// Interaction log embedded in each indexed entity.
///
/// Invariant: `total == interactions.len()` and `watch_seconds` equals the
/// summed duration of `view_start` interactions, at all times. Both are
/// updated atomically by `register` and nowhere else.
#[derive(Debug, Clone, Default)]
pub struct EngagementLog {
    interactions: Vec<InteractionRef>,
    watch_seconds: f64,
    total: u64,
}

impl EngagementLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one interaction. O(1): append and bump the running totals.
    pub fn register(&mut self, interaction: InteractionRef) {
        if interaction.is_view() {
            self.watch_seconds += interaction.watch_seconds;
        }
        self.total += 1;
        self.interactions.push(interaction);
    }

    /// Total interactions registered so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Cumulative watch time in seconds across `view_start` interactions.
    pub fn watch_seconds(&self) -> f64 {
        self.watch_seconds
    }

    /// The registered interactions, in registration order.
    pub fn interactions(&self) -> &[InteractionRef] {
        &self.interactions
    }

    /// Count of likes, shares, and comments. Recounted from the log.
    pub fn engagement_total(&self) -> u64 {
        self.interactions.iter().filter(|i| i.is_engagement()).count() as u64
    }

    /// Occurrence count per interaction type tag, unknown tags included.
    pub fn counts_by_type(&self) -> HashMap<String, u64> {
        let mut counts = HashMap::new();
        for interaction in &self.interactions {
            *counts.entry(interaction.kind.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Mean watch time per view session. 0.0 when nothing was viewed —
    /// never a division error.
    pub fn average_watch_seconds(&self) -> f64 {
        let views = self.interactions.iter().filter(|i| i.is_view()).count();
        if views == 0 {
            return 0.0;
        }
        self.watch_seconds / views as f64
    }

    /// Non-empty comment texts in registration order. Comment-typed
    /// interactions that carry no text are skipped.
    pub fn comments(&self) -> Vec<String> {
        self.interactions
            .iter()
            .filter(|i| i.is_comment())
            .filter_map(|i| i.comment.as_deref())
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// How many comments `comments()` would return, without materializing
    /// the texts.
    pub fn comment_count(&self) -> u64 {
        self.interactions
            .iter()
            .filter(|i| i.is_comment())
            .filter(|i| i.comment.as_deref().is_some_and(|text| !text.is_empty()))
            .count() as u64
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::engagement::interaction::Interaction;

    fn interaction(kind: &str, watch_seconds: f64, comment: Option<&str>) -> InteractionRef {
        Rc::new(Interaction {
            content_id: 1,
            user_id: 1,
            platform: "Test".to_string(),
            kind: kind.to_string(),
            watch_seconds,
            comment: comment.map(str::to_string),
        })
    }

    #[test]
    fn test_register_maintains_totals() {
        let mut log = EngagementLog::new();
        log.register(interaction("view_start", 30.0, None));
        log.register(interaction("like", 0.0, None));
        log.register(interaction("view_start", 12.5, None));

        assert_eq!(log.total(), 3);
        assert_eq!(log.interactions().len(), 3);
        assert!((log.watch_seconds() - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_view_duration_is_ignored() {
        let mut log = EngagementLog::new();
        // Duration on a like is noise from the source; it must not count.
        log.register(interaction("like", 99.0, None));
        assert_eq!(log.watch_seconds(), 0.0);
    }

    #[test]
    fn test_engagement_total_counts_only_engagement_kinds() {
        let mut log = EngagementLog::new();
        log.register(interaction("view_start", 10.0, None));
        log.register(interaction("like", 0.0, None));
        log.register(interaction("share", 0.0, None));
        log.register(interaction("comment", 0.0, Some("nice")));
        log.register(interaction("vote_poll", 0.0, None));

        assert_eq!(log.engagement_total(), 3);
    }

    #[test]
    fn test_counts_by_type_sums_to_total() {
        let mut log = EngagementLog::new();
        for kind in ["view_start", "like", "like", "comment", "vote_poll"] {
            log.register(interaction(kind, 0.0, None));
        }

        let counts = log.counts_by_type();
        assert_eq!(counts["like"], 2);
        assert_eq!(counts["vote_poll"], 1);
        assert_eq!(counts.values().sum::<u64>(), log.total());
    }

    #[test]
    fn test_average_is_zero_without_views() {
        let mut log = EngagementLog::new();
        log.register(interaction("like", 0.0, None));
        assert_eq!(log.average_watch_seconds(), 0.0);
    }

    #[test]
    fn test_average_over_view_sessions_only() {
        let mut log = EngagementLog::new();
        log.register(interaction("view_start", 30.0, None));
        log.register(interaction("view_start", 10.0, None));
        log.register(interaction("like", 0.0, None));

        assert!((log.average_watch_seconds() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_comments_skip_empty_text() {
        let mut log = EngagementLog::new();
        log.register(interaction("comment", 0.0, Some("first")));
        log.register(interaction("comment", 0.0, None));
        log.register(interaction("comment", 0.0, Some("")));
        log.register(interaction("comment", 0.0, Some("second")));
        log.register(interaction("like", 0.0, Some("not a comment")));

        assert_eq!(log.comments(), vec!["first", "second"]);
        assert_eq!(log.comment_count(), 2);
    }
}
