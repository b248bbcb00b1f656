// A single interaction event, immutable once built.
//
// The pipeline constructs one Interaction per well-formed record and hands
// shared ownership to the content, user, and platform it touched. The
// interaction carries the keys of those entities rather than pointers to
// them — entities own handles to interactions, never the other way around.

use std::rc::Rc;

use serde::Serialize;

/// Type tag for a view session start. Watch duration is only meaningful on
/// records carrying this tag.
pub const VIEW_START: &str = "view_start";

/// Type tag for a comment. Comment text is only meaningful on these.
pub const COMMENT: &str = "comment";

/// The interaction types counted as active engagement, versus passive
/// consumption.
pub const ENGAGEMENT_KINDS: [&str; 3] = ["like", "share", "comment"];

/// One user-content-platform interaction from the stream.
#[derive(Debug, Clone, Serialize)]
pub struct Interaction {
    pub content_id: u64,
    pub user_id: u64,
    pub platform: String,
    /// Raw type tag from the source. The vocabulary is not validated —
    /// unknown tags are stored and counted like any other type.
    pub kind: String,
    /// Seconds watched. Only meaningful when `kind` is `view_start`.
    pub watch_seconds: f64,
    /// Comment text, when the record carried one.
    pub comment: Option<String>,
}

impl Interaction {
    pub fn is_view(&self) -> bool {
        self.kind == VIEW_START
    }

    pub fn is_comment(&self) -> bool {
        self.kind == COMMENT
    }

    pub fn is_engagement(&self) -> bool {
        ENGAGEMENT_KINDS.contains(&self.kind.as_str())
    }
}

/// Shared handle to an interaction. Every interaction is owned jointly by
/// the three entities it links; the pipeline is single-threaded, so `Rc`
/// suffices.
pub type InteractionRef = Rc<Interaction>;
