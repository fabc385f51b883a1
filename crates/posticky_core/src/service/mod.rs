//! Note use-case services.
//!
//! # Responsibility
//! - Own note lifetime (`NoteStore`), the selection cursor and the editor view.
//! - Compose them into single user intents (`Notebook`).
//!
//! # Invariants
//! - Every mutation is synchronous and visible to the next read.
//! - Selection never outlives the note it points at after a notebook delete.

pub mod editor_session;
pub mod note_store;
pub mod notebook;
pub mod selection;
