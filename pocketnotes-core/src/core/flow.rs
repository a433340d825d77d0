//! Listing/editing state machine behind the note screens.
//!
//! [`NoteFlow`] holds only presentation state: which screen is showing, the
//! working copy of the fields being edited and whether a dialog is open. The
//! notes themselves stay in the [`NoteStore`], which is passed into every
//! operation that reads or commits data. This keeps the flow free of any UI
//! toolkit so the desktop shell is a thin renderer over it.
//!
//! ## Transitions
//!
//! - `Listing` → `Editing(New)` via [`NoteFlow::open_create`].
//! - `Listing` → `Editing(Existing)` via [`NoteFlow::open_edit`] or
//!   [`NoteFlow::open_edit_at`], pre-populated from the stored note.
//! - `Editing` → `Listing` on a successful [`NoteFlow::save`], a confirmed
//!   delete, or [`NoteFlow::cancel`].
//! - A failed save stays in `Editing` with the validation errors attached to
//!   the session.

use crate::{Note, NoteId, NoteLimits, NoteStore, PocketNotesError, Result};
use log::{debug, info};

/// The note an editing session will commit to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// Saving appends a new note.
    New,
    /// Saving replaces the note with this ID.
    Existing(NoteId),
}

/// Working state of the edit screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub target: EditTarget,
    pub title: String,
    pub body: String,
    /// Messages from the most recent rejected save. Cleared on the next save.
    pub errors: Vec<String>,
    /// Set while the Yes/No delete confirmation is showing.
    pub confirming_delete: bool,
}

impl EditSession {
    fn new(target: EditTarget, title: String, body: String) -> Self {
        Self {
            target,
            title,
            body,
            errors: Vec::new(),
            confirming_delete: false,
        }
    }

    /// Whether "Delete Note" is offered for this session.
    pub fn can_delete(&self) -> bool {
        matches!(self.target, EditTarget::Existing(_))
    }
}

/// Which screen the flow is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Listing,
    Editing(EditSession),
}

/// Result of a successful [`NoteFlow::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(NoteId),
    Updated(NoteId),
}

/// Drives the create/edit/delete screens against a [`NoteStore`].
#[derive(Debug)]
pub struct NoteFlow {
    screen: Screen,
    info_open: bool,
    limits: NoteLimits,
}

impl Default for NoteFlow {
    fn default() -> Self {
        Self::new(NoteLimits::default())
    }
}

impl NoteFlow {
    /// Creates a flow on the listing screen that validates with `limits`.
    pub fn new(limits: NoteLimits) -> Self {
        Self {
            screen: Screen::Listing,
            info_open: false,
            limits,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Help text for the "Information" dialog, stating the limits this flow
    /// actually enforces.
    pub fn info_text(&self) -> String {
        format!(
            "Tap \"Create Note\" to write a new note. \
             Tap a note in the list to edit or delete it. \
             Titles must be {} to {} characters long and the text at most {} characters. \
             Notes are kept only while the app is running.",
            self.limits.title_min, self.limits.title_max, self.limits.body_max
        )
    }

    /// Returns the active edit session, if the edit screen is showing.
    pub fn session(&self) -> Option<&EditSession> {
        match &self.screen {
            Screen::Editing(session) => Some(session),
            Screen::Listing => None,
        }
    }

    pub fn is_listing(&self) -> bool {
        matches!(self.screen, Screen::Listing)
    }

    pub fn info_open(&self) -> bool {
        self.info_open
    }

    /// Opens the "Information" dialog. Ignored outside the listing screen.
    pub fn show_info(&mut self) {
        if self.is_listing() {
            self.info_open = true;
        }
    }

    pub fn dismiss_info(&mut self) {
        self.info_open = false;
    }

    /// Starts creating a new note with empty fields.
    ///
    /// # Errors
    ///
    /// Returns [`PocketNotesError::InvalidAction`] if an edit is already in
    /// progress.
    pub fn open_create(&mut self) -> Result<()> {
        self.require_listing("create a note")?;
        self.enter(EditSession::new(EditTarget::New, String::new(), String::new()));
        Ok(())
    }

    /// Starts editing the note with `id`, copying its fields into the session.
    ///
    /// # Errors
    ///
    /// Returns [`PocketNotesError::NoteNotFound`] if the store has no such
    /// note, or [`PocketNotesError::InvalidAction`] if an edit is already in
    /// progress. The flow stays on the listing screen in both cases.
    pub fn open_edit(&mut self, store: &NoteStore, id: NoteId) -> Result<()> {
        self.require_listing("edit a note")?;
        let note = store.get(id).ok_or(PocketNotesError::NoteNotFound(id))?;
        self.enter(EditSession::new(
            EditTarget::Existing(id),
            note.title.clone(),
            note.body.clone(),
        ));
        Ok(())
    }

    /// Starts editing the note at list position `index`.
    ///
    /// An index past the end of the store opens an empty session that will
    /// create a new note on save, the same as [`Self::open_create`].
    ///
    /// # Errors
    ///
    /// Returns [`PocketNotesError::InvalidAction`] if an edit is already in
    /// progress.
    pub fn open_edit_at(&mut self, store: &NoteStore, index: usize) -> Result<()> {
        self.require_listing("edit a note")?;
        let session = match store.get_at(index) {
            Some(note) => EditSession::new(
                EditTarget::Existing(note.id),
                note.title.clone(),
                note.body.clone(),
            ),
            None => {
                debug!("edit index {index} out of range; opening empty session");
                EditSession::new(EditTarget::New, String::new(), String::new())
            }
        };
        self.enter(session);
        Ok(())
    }

    /// Replaces the working title.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.session_mut("edit the title")?.title = title.into();
        Ok(())
    }

    /// Replaces the working body.
    pub fn set_body(&mut self, body: impl Into<String>) -> Result<()> {
        self.session_mut("edit the text")?.body = body.into();
        Ok(())
    }

    /// Whether the working title is currently out of bounds.
    pub fn title_invalid(&self) -> bool {
        self.session()
            .is_some_and(|session| self.limits.title_invalid(&session.title))
    }

    /// Whether the working body is currently out of bounds.
    pub fn body_invalid(&self) -> bool {
        self.session()
            .is_some_and(|session| self.limits.body_invalid(&session.body))
    }

    /// Validates the working fields and commits them to `store`.
    ///
    /// On success the flow returns to the listing screen. On failure it
    /// stays on the edit screen with the session's `errors` populated, and
    /// the store is untouched.
    ///
    /// # Errors
    ///
    /// - [`PocketNotesError::ValidationFailed`] carrying the same messages
    ///   stored on the session.
    /// - [`PocketNotesError::NoteNotFound`] if the note being edited was
    ///   removed from the store in the meantime.
    /// - [`PocketNotesError::InvalidAction`] if no edit is in progress.
    pub fn save(&mut self, store: &mut NoteStore) -> Result<SaveOutcome> {
        let limits = self.limits;
        let session = self.session_mut("save a note")?;

        let errors = limits.validate(&session.title, &session.body);
        if !errors.is_empty() {
            debug!("save rejected with {} validation error(s)", errors.len());
            session.errors = errors.clone();
            return Err(PocketNotesError::ValidationFailed(errors));
        }
        session.errors.clear();

        let outcome = match session.target {
            EditTarget::New => {
                let note = Note::new(session.title.clone(), session.body.clone());
                SaveOutcome::Created(store.add(note))
            }
            EditTarget::Existing(id) => {
                store.update(id, session.title.clone(), session.body.clone())?;
                SaveOutcome::Updated(id)
            }
        };

        info!("note saved: {outcome:?}");
        self.screen = Screen::Listing;
        Ok(outcome)
    }

    /// Opens the Yes/No confirmation for deleting the note being edited.
    ///
    /// # Errors
    ///
    /// Returns [`PocketNotesError::InvalidAction`] if no edit is in progress
    /// or the session is creating a new note.
    pub fn request_delete(&mut self) -> Result<()> {
        let session = self.session_mut("delete a note")?;
        if !session.can_delete() {
            return Err(PocketNotesError::InvalidAction(
                "A note that has not been saved cannot be deleted".to_string(),
            ));
        }
        session.confirming_delete = true;
        Ok(())
    }

    /// Answers "No" to the delete confirmation; editing continues.
    pub fn cancel_delete(&mut self) {
        if let Screen::Editing(session) = &mut self.screen {
            session.confirming_delete = false;
        }
    }

    /// Answers "Yes" to the delete confirmation, removing the note from
    /// `store` and returning to the listing screen.
    ///
    /// # Errors
    ///
    /// - [`PocketNotesError::InvalidAction`] if no confirmation is pending.
    /// - [`PocketNotesError::NoteNotFound`] if the note is already gone; the
    ///   flow still returns to the listing screen since there is nothing
    ///   left to edit.
    pub fn confirm_delete(&mut self, store: &mut NoteStore) -> Result<Note> {
        let session = self.session_mut("delete a note")?;
        let id = match (session.confirming_delete, session.target) {
            (true, EditTarget::Existing(id)) => id,
            _ => {
                return Err(PocketNotesError::InvalidAction(
                    "Delete has not been confirmed".to_string(),
                ))
            }
        };

        self.screen = Screen::Listing;
        let removed = store.remove_by_id(id)?;
        info!("note deleted id={id}");
        Ok(removed)
    }

    /// Leaves the edit screen without committing anything.
    pub fn cancel(&mut self) {
        if let Screen::Editing(session) = &self.screen {
            debug!("edit cancelled target={:?}", session.target);
        }
        self.screen = Screen::Listing;
    }

    fn enter(&mut self, session: EditSession) {
        debug!("editing target={:?}", session.target);
        self.info_open = false;
        self.screen = Screen::Editing(session);
    }

    fn require_listing(&self, action: &str) -> Result<()> {
        if self.is_listing() {
            Ok(())
        } else {
            Err(PocketNotesError::InvalidAction(format!(
                "Cannot {action} while another note is being edited"
            )))
        }
    }

    fn session_mut(&mut self, action: &str) -> Result<&mut EditSession> {
        match &mut self.screen {
            Screen::Editing(session) => Ok(session),
            Screen::Listing => Err(PocketNotesError::InvalidAction(format!(
                "Cannot {action} outside the edit screen"
            ))),
        }
    }
}
