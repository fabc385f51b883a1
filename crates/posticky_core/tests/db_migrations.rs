use posticky_core::db::migrations::{apply_migrations, latest_version, schema_version};
use posticky_core::db::{open_db, open_db_in_memory, DbError, DbLocation};
use posticky_core::{RepoError, SqliteNoteRepository};
use rusqlite::Connection;
use std::error::Error;

#[test]
fn fresh_database_gets_notes_table_and_creation_order_index() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    assert_schema_object(&conn, "table", "notes");
    assert_schema_object(&conn, "index", "idx_notes_creation_order");

    let indexed: Vec<String> = conn
        .prepare("SELECT name FROM pragma_index_info('idx_notes_creation_order') ORDER BY seqno;")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(indexed, vec!["creation_date", "seq"]);
}

#[test]
fn migrations_report_what_they_applied() {
    let mut conn = Connection::open_in_memory().unwrap();

    assert_eq!(apply_migrations(&mut conn).unwrap(), vec![1]);
    assert!(apply_migrations(&mut conn).unwrap().is_empty());
    assert_eq!(schema_version(&conn).unwrap(), latest_version());
}

#[test]
fn reopening_a_notes_file_keeps_its_notes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("posticky.db");

    let first = open_db(&path).unwrap();
    insert_raw(&first, "kept", 1_000);
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(schema_version(&second).unwrap(), latest_version());
    let title: String = second
        .query_row("SELECT title FROM notes;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(title, "kept");
}

#[test]
fn insertion_sequence_is_never_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    insert_raw(&conn, "a", 1_000);
    let last = insert_raw(&conn, "b", 1_000);

    conn.execute("DELETE FROM notes WHERE seq = ?1;", [last])
        .unwrap();
    let next = insert_raw(&conn, "c", 1_000);

    assert!(next > last, "seq {next} reused or went backwards (last {last})");
}

#[test]
fn unopenable_path_is_named_in_the_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("notes.db");

    let err = open_db(&path).unwrap_err();
    match &err {
        DbError::Open { location, .. } => {
            assert_eq!(location, &DbLocation::File(path.clone()));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains(&path.display().to_string()));
    assert!(err.source().is_some());
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failed_migration_names_the_step_and_leaves_version_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    // A pre-versioned notes table without creation_date cannot take the index.
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("CREATE TABLE notes (seq INTEGER PRIMARY KEY, uuid TEXT, title TEXT);")
        .unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::Migration { version, name, .. } => {
            assert_eq!(version, 1);
            assert_eq!(name, "notes_table");
        }
        other => panic!("unexpected error: {other}"),
    }

    let conn = Connection::open(&path).unwrap();
    assert_eq!(schema_version(&conn).unwrap(), 0);
}

#[test]
fn repository_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqliteNoteRepository::try_new(&conn).err().unwrap();
    assert!(matches!(err, RepoError::MissingRequiredTable("notes")));
}

#[test]
fn repository_rejects_notes_table_missing_columns() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE notes (seq INTEGER PRIMARY KEY, uuid TEXT);")
        .unwrap();
    let err = SqliteNoteRepository::try_new(&conn).err().unwrap();
    assert!(matches!(
        err,
        RepoError::MissingRequiredColumn {
            table: "notes",
            column: "title"
        }
    ));
}

fn insert_raw(conn: &Connection, title: &str, creation_date: i64) -> i64 {
    conn.execute(
        "INSERT INTO notes (uuid, title, content, creation_date) VALUES (?1, ?2, '', ?3);",
        rusqlite::params![uuid::Uuid::new_v4().to_string(), title, creation_date],
    )
    .unwrap();
    conn.last_insert_rowid()
}

fn assert_schema_object(conn: &Connection, kind: &str, name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = ?1 AND name = ?2);",
            [kind, name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "{kind} {name} does not exist");
}
