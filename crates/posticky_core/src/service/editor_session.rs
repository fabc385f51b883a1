//! Editor view over the selected note.
//!
//! # Responsibility
//! - Resolve the current selection into an editable note on every call.
//! - Write title/content edits straight through to the note store.
//!
//! # Invariants
//! - No local buffering: each edit is its own durable write, last write wins.
//! - An unset or dangling selection reads as `EditorState::Empty` and never
//!   fails.

use crate::model::note::{Note, NoteId};
use crate::preview::MarkdownRenderer;
use crate::repo::note_repo::NoteRepository;
use crate::service::note_store::{NoteStore, StoreResult};
use log::debug;

/// What the detail pane should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    /// Nothing (resolvable) is selected.
    Empty,
    Editing(Note),
}

impl EditorState {
    pub fn note(&self) -> Option<&Note> {
        match self {
            Self::Empty => None,
            Self::Editing(note) => Some(note),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// True while editing a note whose content is the empty string.
    pub fn shows_placeholder(&self) -> bool {
        self.note().is_some_and(Note::has_empty_content)
    }

    fn from_resolved(note: Option<Note>) -> Self {
        note.map_or(Self::Empty, Self::Editing)
    }
}

/// Borrowed view binding the selected note's fields to live edits.
pub struct EditorSession<'a, R: NoteRepository> {
    store: &'a NoteStore<R>,
    selected: Option<NoteId>,
}

impl<'a, R: NoteRepository> EditorSession<'a, R> {
    pub fn new(store: &'a NoteStore<R>, selected: Option<NoteId>) -> Self {
        Self { store, selected }
    }

    /// Resolves the selection against the store.
    pub fn state(&self) -> StoreResult<EditorState> {
        let Some(id) = self.selected else {
            return Ok(EditorState::Empty);
        };
        let resolved = self.store.get(id)?;
        if resolved.is_none() {
            debug!("event=selection_dangling module=editor status=recovered note_id={id}");
        }
        Ok(EditorState::from_resolved(resolved))
    }

    pub fn set_title(&self, title: &str) -> StoreResult<EditorState> {
        match self.selected {
            Some(id) => Ok(EditorState::from_resolved(self.store.set_title(id, title)?)),
            None => Ok(EditorState::Empty),
        }
    }

    pub fn set_content(&self, content: &str) -> StoreResult<EditorState> {
        match self.selected {
            Some(id) => Ok(EditorState::from_resolved(
                self.store.set_content(id, content)?,
            )),
            None => Ok(EditorState::Empty),
        }
    }

    /// Derived display hint; never persisted.
    pub fn shows_placeholder(&self) -> StoreResult<bool> {
        Ok(self.state()?.shows_placeholder())
    }

    /// Renders the current content for the live preview pane.
    ///
    /// Returns `None` when the session is empty.
    pub fn render_preview<M: MarkdownRenderer>(
        &self,
        renderer: &M,
    ) -> StoreResult<Option<M::Output>> {
        Ok(self
            .state()?
            .note()
            .map(|note| renderer.render(note.content.as_str())))
    }
}
