use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier assigned to a note when it is created.
pub type NoteId = Uuid;

/// A short text note held by the [`NoteStore`](super::store::NoteStore).
///
/// Equality is structural on `title` and `body`. The `id` and timestamps
/// identify a particular stored note but never take part in comparisons,
/// so two notes with the same text are equal even when created separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub body: String,
    /// Unix timestamp (seconds, UTC).
    pub created_at: i64,
    /// Unix timestamp (seconds, UTC). Refreshed on every update.
    pub modified_at: i64,
}

impl Note {
    /// Creates a note with a fresh ID and both timestamps set to now.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            body: body.into(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Replaces title and body wholesale, keeping identity and creation time.
    pub(crate) fn replace_content(&mut self, title: String, body: String) {
        self.title = title;
        self.body = body;
        self.modified_at = chrono::Utc::now().timestamp().max(self.created_at);
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.body == other.body
    }
}

impl Eq for Note {}
