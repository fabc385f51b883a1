//! Persistent note collection.
//!
//! # Responsibility
//! - Create, delete, enumerate and fetch notes through a `NoteRepository`.
//! - Apply durable single-field edits (title, content).
//!
//! # Invariants
//! - `list()` is a fresh snapshot sorted by `creation_date` descending,
//!   most recently inserted first on ties.
//! - Deleting an absent id is a no-op, not an error.
//! - Storage errors surface as `StoreError::StorageFailure` and are never
//!   retried here.

use crate::model::note::{default_title, Note, NoteId};
use crate::repo::note_repo::{NoteRepository, RepoError};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub type StoreResult<T> = Result<T, StoreError>;

/// Source of `creation_date` values in epoch milliseconds.
pub type Clock = Box<dyn Fn() -> i64>;

/// Error surfaced by note store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Durable read or write failed. The operation was aborted.
    StorageFailure(RepoError),
    /// A write succeeded but reading the row back found nothing.
    InconsistentState(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StorageFailure(err) => write!(f, "storage failure: {err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StorageFailure(err) => Some(err),
            Self::InconsistentState(_) => None,
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::StorageFailure(value)
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn system_clock_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Sole owner of note lifetime.
pub struct NoteStore<R: NoteRepository> {
    repo: R,
    clock: Clock,
}

impl<R: NoteRepository> NoteStore<R> {
    /// Creates a store stamping notes with the system clock.
    pub fn new(repo: R) -> Self {
        Self::with_clock(repo, Box::new(system_clock_ms))
    }

    /// Creates a store with a caller-supplied clock.
    pub fn with_clock(repo: R, clock: Clock) -> Self {
        Self { repo, clock }
    }

    /// Returns all notes, newest first.
    pub fn list(&self) -> StoreResult<Vec<Note>> {
        self.repo
            .list_notes_by_creation_desc()
            .map_err(|err| storage_failure("note_list", err))
    }

    /// Creates and persists a note.
    ///
    /// A missing `title` becomes `"New Note {n}"` with `n` one past the
    /// current note count; a missing `content` becomes empty.
    pub fn create(&self, title: Option<&str>, content: Option<&str>) -> StoreResult<Note> {
        let title = match title {
            Some(value) => value.to_string(),
            None => default_title(self.len()?),
        };
        let note = Note::new(title, content.unwrap_or_default(), (self.clock)());

        self.repo
            .insert_note(&note)
            .map_err(|err| storage_failure("note_create", err))?;
        self.verify_inserted(&note)?;

        info!(
            "event=note_create module=store status=ok note_id={} creation_date={}",
            note.id, note.creation_date
        );
        Ok(note)
    }

    /// Deletes the note with `id`. Returns whether a note was removed.
    pub fn delete(&self, id: NoteId) -> StoreResult<bool> {
        let removed = self
            .repo
            .remove_note(id)
            .map_err(|err| storage_failure("note_delete", err))?;
        if removed {
            info!("event=note_delete module=store status=ok note_id={id}");
        } else {
            debug!("event=note_delete module=store status=noop note_id={id}");
        }
        Ok(removed)
    }

    /// Looks up one note by id.
    pub fn get(&self, id: NoteId) -> StoreResult<Option<Note>> {
        self.repo
            .get_note(id)
            .map_err(|err| storage_failure("note_get", err))
    }

    /// Durably replaces the title. Returns `None` when `id` does not resolve.
    pub fn set_title(&self, id: NoteId, title: &str) -> StoreResult<Option<Note>> {
        let edited = self
            .repo
            .update_title(id, title)
            .map_err(|err| storage_failure("note_set_title", err))?;
        log_edit(id, edited.is_some());
        Ok(edited)
    }

    /// Durably replaces the content. Returns `None` when `id` does not resolve.
    pub fn set_content(&self, id: NoteId, content: &str) -> StoreResult<Option<Note>> {
        let edited = self
            .repo
            .update_content(id, content)
            .map_err(|err| storage_failure("note_set_content", err))?;
        log_edit(id, edited.is_some());
        Ok(edited)
    }

    /// Number of stored notes.
    pub fn len(&self) -> StoreResult<usize> {
        self.repo
            .count_notes()
            .map_err(|err| storage_failure("note_count", err))
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    // The insert is committed by now; a failed read-back must not report the
    // create as aborted. Only a read that finds nothing is inconsistent.
    fn verify_inserted(&self, note: &Note) -> StoreResult<()> {
        match self.repo.get_note(note.id) {
            Ok(Some(_)) => Ok(()),
            Ok(None) => {
                error!(
                    "event=note_create module=store status=error error_code=inconsistent_state note_id={}",
                    note.id
                );
                Err(StoreError::InconsistentState(
                    "created note not found in read-back",
                ))
            }
            Err(err) => {
                warn!(
                    "event=note_create module=store status=degraded error_code=read_back_failed note_id={} error={}",
                    note.id, err
                );
                Ok(())
            }
        }
    }
}

fn log_edit(id: NoteId, applied: bool) {
    if applied {
        debug!("event=note_edit module=store status=ok note_id={id}");
    } else {
        debug!("event=note_edit module=store status=noop note_id={id}");
    }
}

fn storage_failure(event: &'static str, err: RepoError) -> StoreError {
    error!("event={event} module=store status=error error_code=storage_failure error={err}");
    StoreError::StorageFailure(err)
}
