//! In-memory ordered note collection.

use crate::{Note, NoteId, PocketNotesError, Result};
use log::debug;

/// The single source of truth for note data while the application runs.
///
/// Notes are kept in insertion order and may repeat (two notes with the same
/// title and body are both kept). Nothing is persisted; dropping the store
/// drops every note.
///
/// The store does not validate field lengths. Callers gate writes through
/// [`validate`](crate::validate) first, as [`NoteFlow`](crate::NoteFlow) does.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Fetches a single note by ID.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Fetches the note at `index`, if in bounds.
    pub fn get_at(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    /// Returns the current position of the note with `id`.
    pub fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    /// Appends `note` to the end of the store and returns its ID.
    pub fn add(&mut self, note: Note) -> NoteId {
        let id = note.id;
        self.notes.push(note);
        debug!("note added id={id} count={}", self.notes.len());
        id
    }

    /// Replaces the title and body of the note at `index` with those of `note`.
    ///
    /// The stored note keeps its own `id` and `created_at`; `modified_at` is
    /// refreshed. Any identity carried by `note` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PocketNotesError::IndexOutOfBounds`] if `index` is past the
    /// end of the store. The store is left unchanged in that case.
    pub fn update_at(&mut self, index: usize, note: Note) -> Result<&Note> {
        let len = self.notes.len();
        let slot = self
            .notes
            .get_mut(index)
            .ok_or(PocketNotesError::IndexOutOfBounds { index, len })?;
        slot.replace_content(note.title, note.body);
        debug!("note updated id={} index={index}", slot.id);
        Ok(&*slot)
    }

    /// Replaces the title and body of the note with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`PocketNotesError::NoteNotFound`] if no note has that ID.
    pub fn update(
        &mut self,
        id: NoteId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<&Note> {
        let slot = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(PocketNotesError::NoteNotFound(id))?;
        slot.replace_content(title.into(), body.into());
        debug!("note updated id={id}");
        Ok(&*slot)
    }

    /// Removes the first note structurally equal to `note`.
    ///
    /// Returns the removed note, or `None` (leaving the store untouched) when
    /// no note has the same title and body.
    pub fn remove(&mut self, note: &Note) -> Option<Note> {
        let index = self.notes.iter().position(|candidate| candidate == note)?;
        let removed = self.notes.remove(index);
        debug!("note removed id={} count={}", removed.id, self.notes.len());
        Some(removed)
    }

    /// Removes the note with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`PocketNotesError::NoteNotFound`] if no note has that ID.
    pub fn remove_by_id(&mut self, id: NoteId) -> Result<Note> {
        let index = self
            .position(id)
            .ok_or(PocketNotesError::NoteNotFound(id))?;
        let removed = self.notes.remove(index);
        debug!("note removed id={id} count={}", self.notes.len());
        Ok(removed)
    }
}
