//! Internal domain modules for the PocketNotes core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod error;
pub mod flow;
pub mod note;
pub mod store;
pub mod validation;

#[doc(inline)]
pub use error::{PocketNotesError, Result};
#[doc(inline)]
pub use flow::{EditSession, EditTarget, NoteFlow, SaveOutcome, Screen};
#[doc(inline)]
pub use note::{Note, NoteId};
#[doc(inline)]
pub use store::NoteStore;
#[doc(inline)]
pub use validation::{validate, NoteLimits};
