//! Single-note selection cursor.
//!
//! Holds a stable `NoteId`, never a list index, so the selection survives
//! reordering when new notes are inserted at the top. It does not own the
//! note and performs no existence checks; `Notebook` keeps it consistent
//! with deletes.

use crate::model::note::NoteId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionController {
    current: Option<NoteId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `id` unconditionally.
    pub fn select(&mut self, id: NoteId) {
        self.current = Some(id);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<NoteId> {
        self.current
    }

    pub fn is_selected(&self, id: NoteId) -> bool {
        self.current == Some(id)
    }
}
