//! Error types for the PocketNotes core library.

use crate::NoteId;
use thiserror::Error;

/// All errors that can occur within the PocketNotes core library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PocketNotesError {
    /// A note ID was requested that does not exist in the store.
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    /// A positional operation targeted an index past the end of the store.
    #[error("Index {index} is out of bounds for a store of {len} notes")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The proposed title/body failed the field-length checks.
    #[error("Validation failed: {}", .0.join(" "))]
    ValidationFailed(Vec<String>),

    /// An operation was invoked from a flow state that does not allow it.
    #[error("Invalid action: {0}")]
    InvalidAction(String),
}

/// Convenience alias that pins the error type to [`PocketNotesError`].
pub type Result<T> = std::result::Result<T, PocketNotesError>;

impl PocketNotesError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoteNotFound(_) => "Note no longer exists".to_string(),
            Self::IndexOutOfBounds { .. } => "Note no longer exists".to_string(),
            Self::ValidationFailed(errors) => errors.join("\n"),
            Self::InvalidAction(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_validation_failed_joins_messages() {
        let e = PocketNotesError::ValidationFailed(vec![
            "Title must be at least 3 characters.".to_string(),
            "Text must be at most 120 characters.".to_string(),
        ]);
        assert_eq!(
            e.to_string(),
            "Validation failed: Title must be at least 3 characters. Text must be at most 120 characters."
        );
        assert_eq!(e.user_message().lines().count(), 2);
    }

    #[test]
    fn test_out_of_bounds_mentions_index_and_len() {
        let e = PocketNotesError::IndexOutOfBounds { index: 4, len: 2 };
        let msg = e.to_string();
        assert!(msg.contains('4'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_note_not_found_hides_id_from_user() {
        let id = Uuid::new_v4();
        let e = PocketNotesError::NoteNotFound(id);
        assert!(e.to_string().contains(&id.to_string()));
        assert!(!e.user_message().contains(&id.to_string()));
    }
}
