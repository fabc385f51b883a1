//! Domain model for persisted notes.
//!
//! # Responsibility
//! - Define the note record shared by the store, selection and editor.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` that is never reused.
//! - Deletion is a hard delete; there is no tombstone state.

pub mod note;
