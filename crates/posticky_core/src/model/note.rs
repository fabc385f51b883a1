//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and its default values.
//!
//! # Invariants
//! - `id` is stable across restarts and never reassigned.
//! - `creation_date` is set once at construction and never mutated.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Selection holds this key, never a list position, so it survives reordering.
pub type NoteId = Uuid;

/// Prefix used for generated titles (`"New Note 3"`).
pub const DEFAULT_TITLE_PREFIX: &str = "New Note";
/// Hint shown in the editor pane while a note's content is empty.
pub const CONTENT_PLACEHOLDER: &str = "Start typing your notes here...";
/// Hint shown in the title field while it is empty.
pub const TITLE_PLACEHOLDER: &str = "Note Title";
/// Hint shown in the detail area when nothing is selected.
pub const EMPTY_DETAIL_HINT: &str = "Select a note or tap '+' to create a new one.";

/// A single markdown note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// Markdown source.
    pub content: String,
    /// Unix epoch milliseconds. Sole sort key, newest first.
    pub creation_date: i64,
}

impl Note {
    /// Creates a note with a freshly generated identifier.
    pub fn new(title: impl Into<String>, content: impl Into<String>, creation_date: i64) -> Self {
        Self::with_id(Uuid::new_v4(), title, content, creation_date)
    }

    /// Creates a note with a caller-provided identifier.
    ///
    /// Used when rehydrating rows from storage.
    pub fn with_id(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        creation_date: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            creation_date,
        }
    }

    /// Whether the editor should show the content placeholder instead of text.
    pub fn has_empty_content(&self) -> bool {
        self.content.is_empty()
    }
}

/// Builds the placeholder title for the note created when `existing` notes
/// are already stored.
pub fn default_title(existing: usize) -> String {
    format!("{DEFAULT_TITLE_PREFIX} {}", existing + 1)
}
