//! Core library for PocketNotes — a small note-taking application whose notes
//! live in memory for the lifetime of the process.
//!
//! The data lives in a [`NoteStore`]. Every create, edit and delete goes
//! through a [`NoteFlow`], which gates writes with [`validate`] and tracks
//! which screen the user is on. UI shells render the flow and forward user
//! actions to it; they never touch the store directly.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use self::core::{
    error::{PocketNotesError, Result},
    flow::{EditSession, EditTarget, NoteFlow, SaveOutcome, Screen},
    note::{Note, NoteId},
    store::NoteStore,
    validation::{validate, NoteLimits},
};
