//! Notebook facade combining store, selection and split layout.
//!
//! # Responsibility
//! - Turn UI intents (add, delete, select, edit, drag) into single steps.
//! - Keep the selection consistent with store deletes.
//!
//! # Invariants
//! - `add_note` selects the created note before returning.
//! - `delete_selected` clears the selection only after the delete succeeded;
//!   on `StorageFailure` both store and selection are unchanged.
//! - The store is not handed out, so no delete can bypass the selection
//!   update.

use crate::config::CoreConfig;
use crate::layout::split::SplitRatioController;
use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::NoteRepository;
use crate::service::editor_session::EditorSession;
use crate::service::note_store::{NoteStore, StoreResult};
use crate::service::selection::SelectionController;
use log::debug;

pub struct Notebook<R: NoteRepository> {
    store: NoteStore<R>,
    selection: SelectionController,
    split: SplitRatioController,
}

impl<R: NoteRepository> Notebook<R> {
    pub fn new(store: NoteStore<R>) -> Self {
        Self {
            store,
            selection: SelectionController::new(),
            split: SplitRatioController::new(),
        }
    }

    /// Creates a notebook whose split starts at the configured ratio.
    pub fn with_config(store: NoteStore<R>, config: &CoreConfig) -> Self {
        let mut notebook = Self::new(store);
        notebook.split = SplitRatioController::with_ratio(config.initial_split());
        notebook
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn split(&self) -> &SplitRatioController {
        &self.split
    }

    pub fn split_mut(&mut self) -> &mut SplitRatioController {
        &mut self.split
    }

    /// Notes for the sidebar, newest first.
    pub fn notes(&self) -> StoreResult<Vec<Note>> {
        self.store.list()
    }

    /// Creates a note with default title/content and selects it.
    pub fn add_note(&mut self) -> StoreResult<Note> {
        self.add_note_with(None, None)
    }

    /// Creates a note and selects it.
    pub fn add_note_with(
        &mut self,
        title: Option<&str>,
        content: Option<&str>,
    ) -> StoreResult<Note> {
        let note = self.store.create(title, content)?;
        self.selection.select(note.id);
        Ok(note)
    }

    /// Deletes the selected note and clears the selection.
    ///
    /// Returns the id that was selected, or `None` when nothing was. A
    /// dangling selection is cleared even though nothing is removed.
    pub fn delete_selected(&mut self) -> StoreResult<Option<NoteId>> {
        let Some(id) = self.selection.current() else {
            return Ok(None);
        };
        self.store.delete(id)?;
        self.selection.clear();
        Ok(Some(id))
    }

    /// Deletes `id`, clearing the selection only if it pointed at `id`.
    pub fn delete_note(&mut self, id: NoteId) -> StoreResult<bool> {
        let removed = self.store.delete(id)?;
        if self.selection.is_selected(id) {
            self.selection.clear();
        }
        Ok(removed)
    }

    /// Looks up one note by id.
    pub fn note(&self, id: NoteId) -> StoreResult<Option<Note>> {
        self.store.get(id)
    }

    pub fn select(&mut self, id: NoteId) {
        self.selection.select(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Whether the delete intent should be offered.
    pub fn can_delete_selected(&self) -> bool {
        self.selection.current().is_some()
    }

    /// The selected note, treating a dangling id as no selection.
    pub fn resolved_selection(&self) -> StoreResult<Option<Note>> {
        let Some(id) = self.selection.current() else {
            return Ok(None);
        };
        let note = self.store.get(id)?;
        if note.is_none() {
            debug!("event=selection_dangling module=notebook status=recovered note_id={id}");
        }
        Ok(note)
    }

    pub fn editor(&self) -> EditorSession<'_, R> {
        EditorSession::new(&self.store, self.selection.current())
    }
}
