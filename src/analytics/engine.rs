// Ingestion engine: drains the staging queue into the entity indexes.
//
// Two externally triggered phases. The load phase enqueues raw rows
// verbatim — no validation happens there. The process phase drains the
// queue to empty, creating content, user, and platform entries on first
// reference and fanning each interaction out to all three.
//
// A record that cannot identify its content, user, and platform is dropped
// silently: no entity is created, no metric moves, and processing
// continues with the next record. A bad watch duration is not a reason to
// drop — it defaults to zero.

use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::engagement::entities::{Content, ContentKind, Platform, User};
use crate::engagement::interaction::{Interaction, InteractionRef};
use crate::structures::queue::{RawRecord, RecordQueue};
use crate::structures::tree::EntityIndex;

/// Field names of the ingress record format.
const FIELD_CONTENT_ID: &str = "id_conteudo";
const FIELD_USER_ID: &str = "id_usuario";
const FIELD_PLATFORM: &str = "plataforma";
const FIELD_INTERACTION_TYPE: &str = "tipo_interacao";
const FIELD_CONTENT_NAME: &str = "nome_conteudo";
const FIELD_CONTENT_KIND: &str = "tipo_conteudo";
const FIELD_WATCH_DURATION: &str = "watch_duration_seconds";
const FIELD_COMMENT_TEXT: &str = "comment_text";

/// Owns the staging queue, the two keyed entity indexes, and the platform
/// registry. Strictly single-threaded; process runs to completion before
/// any report is generated.
#[derive(Debug, Default)]
pub struct EngagementEngine {
    queue: RecordQueue,
    contents: EntityIndex<Content>,
    users: EntityIndex<User>,
    platforms: HashMap<String, Platform>,
}

impl EngagementEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue one raw record verbatim.
    pub fn enqueue_record(&mut self, record: RawRecord) {
        self.queue.enqueue(record);
    }

    /// Enqueue a batch of raw records, preserving their order.
    pub fn load(&mut self, records: impl IntoIterator<Item = RawRecord>) {
        for record in records {
            self.queue.enqueue(record);
        }
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn queue_is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Discard all pending records without processing them.
    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    /// Drain the queue, registering one interaction per well-formed record.
    ///
    /// Returns the number of interactions registered. Skipped records are
    /// not counted and not surfaced; the queue is empty afterwards either
    /// way.
    pub fn process(&mut self) -> usize {
        let mut registered = 0;
        while !self.queue.is_empty() {
            // The emptiness check above makes dequeue infallible here.
            let Ok(record) = self.queue.dequeue() else {
                break;
            };
            if self.process_record(record) {
                registered += 1;
            }
        }
        registered
    }

    /// Process one record. Returns false when the record was skipped.
    fn process_record(&mut self, record: RawRecord) -> bool {
        // Both ids are mandatory and must parse as integers.
        let Some(content_id) = parse_id(record.get(FIELD_CONTENT_ID)) else {
            debug!("skipping record: bad or missing {FIELD_CONTENT_ID}");
            return false;
        };
        let Some(user_id) = parse_id(record.get(FIELD_USER_ID)) else {
            debug!("skipping record: bad or missing {FIELD_USER_ID}");
            return false;
        };

        // Platform is mandatory even when both ids parsed cleanly.
        let platform_name = match record.get(FIELD_PLATFORM) {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => {
                debug!(content_id, user_id, "skipping record: missing {FIELD_PLATFORM}");
                return false;
            }
        };

        // Find-or-create the three entities. An already-indexed content
        // keeps its original name and kind; later records do not rename it.
        if !self.contents.contains(content_id) {
            let name = match record.get(FIELD_CONTENT_NAME) {
                Some(name) if !name.trim().is_empty() => name.trim().to_string(),
                _ => format!("content_{content_id}"),
            };
            let kind = record
                .get(FIELD_CONTENT_KIND)
                .and_then(|label| ContentKind::parse(label));
            self.contents
                .insert(content_id, Content::new(content_id, name).with_kind(kind));
        }
        if !self.users.contains(user_id) {
            self.users.insert(user_id, User::new(user_id));
        }
        self.platforms
            .entry(platform_name.clone())
            .or_insert_with(|| Platform::new(platform_name.clone()));

        // A bad or absent duration never drops the record.
        let watch_seconds = record
            .get(FIELD_WATCH_DURATION)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .unwrap_or(0.0);

        let kind = record
            .get(FIELD_INTERACTION_TYPE)
            .map(|tag| tag.trim().to_string())
            .unwrap_or_default();
        let comment = record
            .get(FIELD_COMMENT_TEXT)
            .filter(|text| !text.is_empty())
            .cloned();

        let interaction: InteractionRef = Rc::new(Interaction {
            content_id,
            user_id,
            platform: platform_name.clone(),
            kind,
            watch_seconds,
            comment,
        });

        // Fan out to content, user, and platform, in that order. The three
        // accumulators are independent; the lookups cannot miss because the
        // entries were just created above.
        if let Some(content) = self.contents.get_mut(content_id) {
            content.register_interaction(Rc::clone(&interaction));
        }
        if let Some(user) = self.users.get_mut(user_id) {
            user.register_interaction(Rc::clone(&interaction));
        }
        if let Some(platform) = self.platforms.get_mut(&platform_name) {
            platform.register_interaction(interaction);
        }

        true
    }

    /// All content entities in ascending id order.
    pub fn contents(&self) -> Vec<&Content> {
        self.contents.in_order().into_iter().map(|(_, c)| c).collect()
    }

    /// All users in ascending id order.
    pub fn users(&self) -> Vec<&User> {
        self.users.in_order().into_iter().map(|(_, u)| u).collect()
    }

    /// All registered platforms. Iteration order is not meaningful.
    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.values()
    }

    pub fn content(&self, id: u64) -> Option<&Content> {
        self.contents.get(id)
    }

    pub fn user(&self, id: u64) -> Option<&User> {
        self.users.get(id)
    }

    pub fn platform(&self, name: &str) -> Option<&Platform> {
        self.platforms.get(name)
    }

    pub fn content_count(&self) -> usize {
        self.contents.len()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn platform_count(&self) -> usize {
        self.platforms.len()
    }
}

/// Parse a mandatory integer id field. Missing, empty, and non-numeric
/// values all read as absent.
fn parse_id(field: Option<&String>) -> Option<u64> {
    let raw = field?.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<u64>().ok()
}
