//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert/remove/lookup/ordered-query over the `notes` table.
//! - Provide single-field durable writes for title and content.
//!
//! # Invariants
//! - Listing order is `creation_date DESC, seq DESC`, so equal timestamps
//!   list the most recently inserted note first.
//! - Read paths reject malformed persisted ids instead of masking them.

use crate::db::DbError;
use crate::model::note::{Note, NoteId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const NOTE_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    content,
    creation_date
FROM notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence engine consumed by the note store.
pub trait NoteRepository {
    /// Durably inserts a new note.
    fn insert_note(&self, note: &Note) -> RepoResult<()>;
    /// Removes the note with `id`. Returns `false` when no such note exists.
    fn remove_note(&self, id: NoteId) -> RepoResult<bool>;
    /// Returns every note, newest first, stable on timestamp ties.
    fn list_notes_by_creation_desc(&self) -> RepoResult<Vec<Note>>;
    /// Looks up one note by id.
    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Overwrites the title and returns the updated note in the same
    /// statement. `None` when no such note exists.
    fn update_title(&self, id: NoteId, title: &str) -> RepoResult<Option<Note>>;
    /// Overwrites the content and returns the updated note in the same
    /// statement. `None` when no such note exists.
    fn update_content(&self, id: NoteId, content: &str) -> RepoResult<Option<Note>>;
    /// Number of stored notes.
    fn count_notes(&self) -> RepoResult<usize>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the connection
    ///   was not opened through [`crate::db::open_db`] or was tampered with.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_note_connection_ready(conn)?;
        Ok(Self { conn })
    }

    // Write and read-back are one statement, so a failed read cannot follow
    // a committed write.
    fn update_returning(
        &self,
        update_sql: &str,
        id: NoteId,
        value: &str,
    ) -> RepoResult<Option<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "{update_sql} RETURNING uuid, title, content, creation_date;"
        ))?;
        let mut rows = stmt.query(params![id.to_string(), value])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_note_row(row)?)),
            None => Ok(None),
        }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn insert_note(&self, note: &Note) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO notes (uuid, title, content, creation_date)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                note.id.to_string(),
                note.title.as_str(),
                note.content.as_str(),
                note.creation_date,
            ],
        )?;
        Ok(())
    }

    fn remove_note(&self, id: NoteId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE uuid = ?1;", [id.to_string()])?;
        Ok(changed > 0)
    }

    fn list_notes_by_creation_desc(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NOTE_SELECT_SQL} ORDER BY creation_date DESC, seq DESC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }
        Ok(notes)
    }

    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }
        Ok(None)
    }

    fn update_title(&self, id: NoteId, title: &str) -> RepoResult<Option<Note>> {
        self.update_returning("UPDATE notes SET title = ?2 WHERE uuid = ?1", id, title)
    }

    fn update_content(&self, id: NoteId, content: &str) -> RepoResult<Option<Note>> {
        self.update_returning("UPDATE notes SET content = ?2 WHERE uuid = ?1", id, content)
    }

    fn count_notes(&self) -> RepoResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM notes;", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative note count `{count}`")))
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in notes.uuid"))
    })?;

    Ok(Note::with_id(
        id,
        row.get::<_, String>("title")?,
        row.get::<_, String>("content")?,
        row.get("creation_date")?,
    ))
}

fn ensure_note_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, "notes")? {
        return Err(RepoError::MissingRequiredTable("notes"));
    }

    for column in ["seq", "uuid", "title", "content", "creation_date"] {
        if !table_has_column(conn, "notes", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "notes",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
